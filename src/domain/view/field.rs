use crate::util::*;

/// Read-only view of one time level of the field.
#[derive(Debug, Copy, Clone)]
pub struct FieldView<'a> {
    shape: GridShape,
    buffer: &'a [f64],
}

impl<'a> FieldView<'a> {
    pub fn new(shape: GridShape, buffer: &'a [f64]) -> Self {
        debug_assert!(buffer.len() >= shape.buffer_size());
        FieldView { shape, buffer }
    }

    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    #[track_caller]
    #[inline]
    pub fn view(&self, coord: &Coord) -> f64 {
        debug_assert!(
            self.shape.contains(coord),
            "{} does not contain {:?}",
            self.shape,
            coord
        );
        self.buffer[self.shape.coord_to_linear(coord)]
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn view_test() {
        let shape = GridShape::new(2, 3);
        let buffer: Vec<f64> = (0..6).map(|i| i as f64).collect();
        let field = FieldView::new(shape, &buffer);
        assert_eq!(field.view(&vector![0, 0]), 0.0);
        assert_eq!(field.view(&vector![0, 2]), 2.0);
        assert_eq!(field.view(&vector![1, 0]), 3.0);
        assert_eq!(field.view(&vector![1, 2]), 5.0);
        assert_eq!(field.shape(), &shape);
    }
}
