use bit_set::BitSet;
use image::{DynamicImage, GenericImage, Luma};
use rand::Rng;

use crate::cells::Cartesian2DCoordinate;
use crate::units::{Height, Width};

/// A 2D boolean presence bitmap, immutable once built.
///
/// A set bit in `mask` marks a position as turned *off*. Grids constructed
/// from a mask only create cells at unmasked positions.
#[derive(Debug, Clone)]
pub struct BinaryMask2D {
    mask: BitSet,
    unmasked_count: usize,
    pub width: u32,
    pub height: u32,
}

impl BinaryMask2D {
    /// Build a mask from an image: any pixel with a gray scale value below
    /// 50% is masked off.
    pub fn from_image(data_image: &DynamicImage) -> BinaryMask2D {
        let width = data_image.width();
        let height = data_image.height();
        let gray_scale_image = data_image.to_luma();
        let mut mask = BitSet::with_capacity((width * height) as usize);

        for y in 0..height {
            for x in 0..width {
                let pix: &Luma<u8> = gray_scale_image.get_pixel(x, y);
                let gray_scale_value = pix.data[0];
                if gray_scale_value < 128 {
                    mask.insert((y * width + x) as usize);
                }
            }
        }

        let unmasked_count = (width * height) as usize - mask.len();
        BinaryMask2D { mask, unmasked_count, width, height }
    }

    /// Build a mask from a table of rows, `true` marking a position as
    /// present. Rows shorter than the widest row are masked off past their
    /// own end.
    pub fn from_rows(rows: &[Vec<bool>]) -> BinaryMask2D {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut mask = BitSet::with_capacity(width * height);

        for (y, row) in rows.iter().enumerate() {
            for x in 0..width {
                if !row.get(x).cloned().unwrap_or(false) {
                    mask.insert(y * width + x);
                }
            }
        }

        let unmasked_count = width * height - mask.len();
        BinaryMask2D { mask, unmasked_count, width: width as u32, height: height as u32 }
    }

    /// Is the given coordinate masked out / turned off?
    ///
    /// A coordinate outside the bounds of the mask's 2d space is not masked.
    pub fn is_masked(&self, coord: Cartesian2DCoordinate) -> bool {
        if coord.x < self.width && coord.y < self.height {
            self.mask.contains((coord.y * self.width + coord.x) as usize)
        } else {
            false
        }
    }

    /// The number of unmasked positions over the whole of the mask's space.
    pub fn unmasked_count(&self) -> usize {
        self.unmasked_count
    }

    /// The number of unmasked positions within the given sub-dimensions of
    /// the mask's space.
    pub fn count_unmasked_within_dimensions(&self, width: Width, height: Height) -> usize {
        let mut count = 0;
        for y in 0..height.0 as u32 {
            for x in 0..width.0 as u32 {
                if !self.is_masked(Cartesian2DCoordinate::new(x, y)) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Uniformly sample an unmasked coordinate, or None when every position
    /// is masked off. Rejection samples, retrying until an unmasked position
    /// is hit.
    pub fn random_unmasked_coordinate<R: Rng>(&self, rng: &mut R) -> Option<Cartesian2DCoordinate> {
        if self.unmasked_count == 0 {
            return None;
        }
        let size = (self.width * self.height) as usize;
        loop {
            let index = rng.gen::<usize>() % size;
            if !self.mask.contains(index) {
                return Some(Cartesian2DCoordinate::new((index % self.width as usize) as u32,
                                                       (index / self.width as usize) as u32));
            }
        }
    }

    /// The row-major first unmasked coordinate, or None when every position
    /// is masked off.
    pub fn first_unmasked_coordinate(&self) -> Option<Cartesian2DCoordinate> {
        let size = (self.width * self.height) as usize;
        (0..size)
            .find(|index| !self.mask.contains(*index))
            .map(|index| {
                Cartesian2DCoordinate::new((index % self.width as usize) as u32,
                                           (index / self.width as usize) as u32)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::weak_rng;

    fn t_shape() -> BinaryMask2D {
        BinaryMask2D::from_rows(&[vec![true, true, true],
                                  vec![false, true, false],
                                  vec![false, true, false]])
    }

    #[test]
    fn from_rows_presence() {
        let mask = t_shape();
        assert_eq!(mask.width, 3);
        assert_eq!(mask.height, 3);
        assert_eq!(mask.unmasked_count(), 5);
        assert!(!mask.is_masked(Cartesian2DCoordinate::new(0, 0)));
        assert!(!mask.is_masked(Cartesian2DCoordinate::new(1, 1)));
        assert!(mask.is_masked(Cartesian2DCoordinate::new(0, 1)));
        assert!(mask.is_masked(Cartesian2DCoordinate::new(2, 2)));
    }

    #[test]
    fn short_rows_are_masked_past_their_end() {
        let mask = BinaryMask2D::from_rows(&[vec![true, true, true], vec![true]]);
        assert_eq!(mask.width, 3);
        assert!(!mask.is_masked(Cartesian2DCoordinate::new(0, 1)));
        assert!(mask.is_masked(Cartesian2DCoordinate::new(1, 1)));
        assert!(mask.is_masked(Cartesian2DCoordinate::new(2, 1)));
    }

    #[test]
    fn out_of_bounds_is_not_masked() {
        let mask = t_shape();
        assert!(!mask.is_masked(Cartesian2DCoordinate::new(3, 0)));
        assert!(!mask.is_masked(Cartesian2DCoordinate::new(0, 3)));
        assert!(!mask.is_masked(Cartesian2DCoordinate::new(100, 100)));
    }

    #[test]
    fn count_unmasked_within_sub_dimensions() {
        let mask = t_shape();
        assert_eq!(mask.count_unmasked_within_dimensions(Width(3), Height(3)), 5);
        assert_eq!(mask.count_unmasked_within_dimensions(Width(3), Height(1)), 3);
        assert_eq!(mask.count_unmasked_within_dimensions(Width(2), Height(2)), 3);
        assert_eq!(mask.count_unmasked_within_dimensions(Width(1), Height(1)), 1);
        // Out of bounds positions count as unmasked.
        assert_eq!(mask.count_unmasked_within_dimensions(Width(4), Height(1)), 4);
    }

    #[test]
    fn random_unmasked_coordinate_only_samples_unmasked() {
        let mask = t_shape();
        let mut rng = weak_rng();
        for _ in 0..100 {
            let coord = mask.random_unmasked_coordinate(&mut rng)
                            .expect("mask has unmasked positions");
            assert!(!mask.is_masked(coord));
        }
    }

    #[test]
    fn random_unmasked_coordinate_on_a_full_mask() {
        let mask = BinaryMask2D::from_rows(&[vec![false, false], vec![false, false]]);
        let mut rng = weak_rng();
        assert_eq!(mask.random_unmasked_coordinate(&mut rng), None);
        assert_eq!(mask.first_unmasked_coordinate(), None);
    }

    #[test]
    fn first_unmasked_coordinate_is_row_major() {
        let mask = BinaryMask2D::from_rows(&[vec![false, false, false],
                                             vec![false, false, true]]);
        assert_eq!(mask.first_unmasked_coordinate(), Some(Cartesian2DCoordinate::new(2, 1)));
    }
}
