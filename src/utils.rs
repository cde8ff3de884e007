use std::fmt::{Debug, Formatter};

use cgmath::{BaseNum, Point2, Vector2};

//////////
// RECT //
//////////

/// An axis-aligned rectangular region in 2D space
// A `Rect` with `max.x <= min.x` or `max.y <= min.y` covers no pixels (see `is_empty`)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect<S> {
    min: Point2<S>,
    max: Point2<S>,
}

impl<S: BaseNum> Rect<S> {
    /// Creates a [`Rect`] with a given size and where the minimum corner is the origin (i.e.
    /// `(0, 0)`)
    pub fn from_origin(width: S, height: S) -> Self {
        Self {
            min: Point2::new(S::zero(), S::zero()),
            max: Point2::new(width, height),
        }
    }

    pub fn from_min_size(min: Point2<S>, size: Vector2<S>) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    /// Shorthand for [`Rect::from_min_size`], taking `(x, y, width, height)` like most drawing
    /// APIs do
    pub fn new(x: S, y: S, width: S, height: S) -> Self {
        Self::from_min_size(Point2::new(x, y), Vector2::new(width, height))
    }

    pub fn min(&self) -> Point2<S> {
        self.min
    }

    pub fn max(&self) -> Point2<S> {
        self.max
    }

    pub fn width(&self) -> S {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> S {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point2<S> {
        let two = S::one() + S::one();
        Point2::new(
            self.min.x + self.width() / two,
            self.min.y + self.height() / two,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= S::zero() || self.height() <= S::zero()
    }

    /// Shrinks a [`Rect`] by `dx` on the left and right and `dy` on the top and bottom
    pub fn reduced(self, dx: S, dy: S) -> Self {
        let min = Point2::new(self.min.x + dx, self.min.y + dy);
        let max = Point2::new(
            partial_max(self.max.x - dx, min.x),
            partial_max(self.max.y - dy, min.y),
        );
        Self { min, max }
    }

    /// Splits a strip of height `amount` off the top of `self`, returning the strip
    pub fn remove_from_top(&mut self, amount: S) -> Self {
        let split = partial_min(self.min.y + amount, self.max.y);
        let strip = Self {
            min: self.min,
            max: Point2::new(self.max.x, split),
        };
        self.min.y = split;
        strip
    }

    /// Splits a strip of height `amount` off the bottom of `self`, returning the strip
    pub fn remove_from_bottom(&mut self, amount: S) -> Self {
        let split = partial_max(self.max.y - amount, self.min.y);
        let strip = Self {
            min: Point2::new(self.min.x, split),
            max: self.max,
        };
        self.max.y = split;
        strip
    }

    /// Splits a strip of width `amount` off the left of `self`, returning the strip
    pub fn remove_from_left(&mut self, amount: S) -> Self {
        let split = partial_min(self.min.x + amount, self.max.x);
        let strip = Self {
            min: self.min,
            max: Point2::new(split, self.max.y),
        };
        self.min.x = split;
        strip
    }

    /// Splits a strip of width `amount` off the right of `self`, returning the strip
    pub fn remove_from_right(&mut self, amount: S) -> Self {
        let split = partial_max(self.max.x - amount, self.min.x);
        let strip = Self {
            min: Point2::new(split, self.min.y),
            max: self.max,
        };
        self.max.x = split;
        strip
    }
}

impl<S: PartialOrd + Copy> Rect<S> {
    pub fn intersection(self, other: Self) -> Self {
        let min_x = partial_max(self.min.x, other.min.x);
        let min_y = partial_max(self.min.y, other.min.y);
        let max_x = partial_max(partial_min(self.max.x, other.max.x), min_x);
        let max_y = partial_max(partial_min(self.max.y, other.max.y), min_y);
        Self {
            min: Point2::new(min_x, min_y),
            max: Point2::new(max_x, max_y),
        }
    }
}

impl Rect<i32> {
    pub fn to_f32(self) -> Rect<f32> {
        Rect {
            min: Point2::new(self.min.x as f32, self.min.y as f32),
            max: Point2::new(self.max.x as f32, self.max.y as f32),
        }
    }
}

impl<S: Debug> Debug for Rect<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect(({:?}, {:?}) - ({:?}, {:?}))",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

fn partial_max<S: PartialOrd>(x: S, y: S) -> S {
    if x < y {
        y
    } else {
        x
    }
}

fn partial_min<S: PartialOrd>(x: S, y: S) -> S {
    if x < y {
        x
    } else {
        y
    }
}
