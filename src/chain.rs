//! Descriptions of the effects shown in the mock-ups, and the sample effect chains drawn by each
//! scene.

use itertools::Itertools;

use crate::knob;

/// The value given to parameters whose descriptor doesn't provide one
pub const DEFAULT_VALUE: f32 = 0.5;

/// One effect in a chain, along with the parameters shown on its panel
#[derive(Debug, Clone, PartialEq)]
pub struct EffectDescriptor {
    pub name: String,
    pub params: Vec<Param>,
}

impl EffectDescriptor {
    pub fn new(name: impl Into<String>, params: Vec<Param>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Creates an effect whose parameters are all drawn as knobs.  Parameters without a
    /// corresponding entry in `values` get [`DEFAULT_VALUE`].
    pub fn knobs(name: &str, labels: &[&str], values: &[f32]) -> Self {
        let params = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let value = values.get(i).copied().unwrap_or(DEFAULT_VALUE);
                Param::new(*label, value, Widget::Knob)
            })
            .collect_vec();
        Self::new(name, params)
    }

    /// The parameters whose normalized values lie outside `0..=1`
    pub fn out_of_range_params(&self) -> impl Iterator<Item = &Param> {
        self.params
            .iter()
            .filter(|p| p.widget.has_position() && !knob::is_in_range(p.value))
    }
}

/// A single parameter control on an effect panel
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub label: String,
    /// The normalized position of the control (usually in `0..=1`)
    pub value: f32,
    pub widget: Widget,
}

impl Param {
    pub fn new(label: impl Into<String>, value: f32, widget: Widget) -> Self {
        Self {
            label: label.into(),
            value,
            widget,
        }
    }

    /// Creates a parameter from a raw (un-normalized) `value` within `range`
    pub fn ranged(label: impl Into<String>, value: f32, range: ParamRange, widget: Widget) -> Self {
        Self::new(label, range.normalize(value), widget)
    }
}

/// The different kinds of control which a [`Param`] can be drawn as
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Knob,
    VerticalSlider,
    HorizontalSlider,
    Toggle,
    ComboBox { options: Vec<String>, selected: usize },
    Label { text: String },
    /// A level meter, filled up to the parameter's value
    Meter,
}

impl Widget {
    pub fn combo_box(options: &[&str], selected: usize) -> Self {
        Widget::ComboBox {
            options: options.iter().map(|s| s.to_string()).collect_vec(),
            selected,
        }
    }

    /// Does this widget display a parameter's value as a position?
    pub fn has_position(&self) -> bool {
        matches!(
            self,
            Widget::Knob | Widget::VerticalSlider | Widget::HorizontalSlider | Widget::Meter
        )
    }
}

/// The range of raw values which a parameter can take
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
}

impl ParamRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// The range used for a parameter with no explicit bounds: `0` up to twice the magnitude of
    /// its value (and at least `1`)
    pub fn default_for(value: f32) -> Self {
        Self::new(0.0, (value.abs() * 2.0).max(1.0))
    }

    /// Maps a raw value into `0..=1`.  Values outside the range are not clamped.
    pub fn normalize(self, value: f32) -> f32 {
        let span = self.max - self.min;
        if span == 0.0 {
            return 0.0;
        }
        (value - self.min) / span
    }
}

///////////////////
// SAMPLE CHAINS //
///////////////////

/// The effect chain drawn by the visual view
pub fn visual_view_chain() -> Vec<EffectDescriptor> {
    vec![
        EffectDescriptor::knobs("Gain", &["Gain"], &[0.5]),
        EffectDescriptor::knobs(
            "Compressor",
            &["Thresh", "Ratio", "Attack", "Release"],
            &[0.7, 0.4, 0.2, 0.3],
        ),
        EffectDescriptor::knobs("Filter (LowPass)", &["Freq", "Q"], &[0.3, 0.5]),
        EffectDescriptor::knobs("Delay", &["Time", "Feedbk", "Mix"], &[0.4, 0.3, 0.4]),
        EffectDescriptor::knobs(
            "Reverb",
            &["Size", "Damp", "Wet", "Dry", "Width"],
            &[0.6, 0.5, 0.3, 0.7, 1.0],
        ),
    ]
}

/// The effect chain drawn in the right-hand column of the composite screenshot.  The raw values
/// match the sample configuration shown in its code editor.
pub fn composite_chain() -> Vec<EffectDescriptor> {
    use Widget::{Knob, VerticalSlider};

    vec![
        EffectDescriptor::new(
            "Gain",
            vec![
                Param::ranged("Gain", 1.0, ParamRange::default_for(1.0), Knob),
                Param::new("Bypass", 0.0, Widget::Toggle),
            ],
        ),
        EffectDescriptor::new(
            "Compressor",
            vec![
                Param::ranged("Thresh", -15.0, ParamRange::new(-60.0, 0.0), VerticalSlider),
                Param::ranged("Ratio", 4.0, ParamRange::new(1.0, 20.0), Knob),
                Param::ranged("Attack", 10.0, ParamRange::new(0.1, 100.0), Knob),
                Param::ranged("Release", 100.0, ParamRange::new(10.0, 1000.0), Knob),
            ],
        ),
        EffectDescriptor::new(
            "Filter",
            vec![
                Param::new(
                    "Mode",
                    0.0,
                    Widget::combo_box(&["LowPass", "HighPass", "BandPass"], 0),
                ),
                Param::ranged("Freq", 2500.0, ParamRange::new(20.0, 20_000.0), Knob),
                Param::ranged("Q", 0.707, ParamRange::new(0.1, 10.0), Knob),
            ],
        ),
        EffectDescriptor::new(
            "Delay",
            vec![
                Param::ranged("Time", 450.0, ParamRange::new(0.0, 2000.0), Knob),
                Param::ranged("Feedbk", 0.3, ParamRange::default_for(0.3), VerticalSlider),
                Param::ranged("Mix", 0.4, ParamRange::default_for(0.4), VerticalSlider),
                Param::new(
                    "Sync",
                    0.0,
                    Widget::Label {
                        text: "1/8 D".to_owned(),
                    },
                ),
            ],
        ),
        EffectDescriptor::new(
            "Reverb",
            vec![
                Param::ranged("Size", 0.6, ParamRange::default_for(0.6), Knob),
                Param::ranged("Wet", 0.3, ParamRange::default_for(0.3), VerticalSlider),
                Param::new("Width", 1.0, Widget::HorizontalSlider),
                Param::new("Out", 0.72, Widget::Meter),
            ],
        ),
    ]
}
