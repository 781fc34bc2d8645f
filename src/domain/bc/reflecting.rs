use super::*;

/// Zero-flux (Neumann) boundary.
/// Off-grid neighbors are left out, so an edge cell sees three neighbors
/// and a corner two, and the Laplacian subtracts the center
/// once per neighbor actually seen.
#[derive(Debug, Default, Copy, Clone)]
pub struct ReflectingCheck;

impl BoundaryCheck for ReflectingCheck {
    #[inline]
    fn neighbors(&self, field: &FieldView<'_>, coord: &Coord) -> Neighborhood {
        let shape = field.shape();
        match classify(coord, shape) {
            CellClass::Interior => star_sum(field, coord),
            class => {
                let mut result = Neighborhood::default();
                for o in STAR_OFFSETS {
                    let n = coord + Coord::new(o[0], o[1]);
                    if shape.contains(&n) {
                        result.push(field.view(&n));
                    }
                }
                debug_assert!(class
                    .neighbor_count()
                    .map_or(true, |count| count == result.count));
                result
            }
        }
    }
}
