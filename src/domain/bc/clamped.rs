use super::*;

/// Index clamping boundary.
/// An off-grid neighbor is replaced by the nearest in-grid cell,
/// for a straight edge that is the cell itself,
/// so every cell is evaluated with the full four neighbor form.
#[derive(Debug, Default, Copy, Clone)]
pub struct ClampedCheck;

impl BoundaryCheck for ClampedCheck {
    #[inline]
    fn neighbors(&self, field: &FieldView<'_>, coord: &Coord) -> Neighborhood {
        let shape = field.shape();
        match classify(coord, shape) {
            CellClass::Interior => star_sum(field, coord),
            _ => {
                let mut result = Neighborhood::default();
                for o in STAR_OFFSETS {
                    let n = shape.clamp(&(coord + Coord::new(o[0], o[1])));
                    result.push(field.view(&n));
                }
                result
            }
        }
    }
}
