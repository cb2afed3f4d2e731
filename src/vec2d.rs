/// Row-major grid: the cell at `(x, y)` lives at `y * width + x`, so iterating the
/// buffer walks rows top to bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct Vec2D<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Vec2D<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Vec2D<T> {
        Vec2D {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }

    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[self.index_of(x, y)]
    }
}

impl<T> Vec2D<T> {
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    pub fn write_at(&mut self, x: usize, y: usize, value: T) {
        let index = self.index_of(x, y);
        self.buffer[index] = value
    }

    pub fn total_pixels(&self) -> usize {
        self.buffer.len()
    }

    // top row first
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.buffer.chunks(self.width.max(1))
    }
}
