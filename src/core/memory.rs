//! Image levels are stored in square blocks so that texels which are
//! close in (s, t) are also close in memory.

// std
use std::ops::{Index, IndexMut};
// others
use num;

const LOG_BLOCK_SIZE: usize = 2;
const BLOCK_SIZE: usize = 1 << LOG_BLOCK_SIZE;

fn round_up(x: usize) -> usize {
    (x + BLOCK_SIZE - 1) & !(BLOCK_SIZE - 1)
}

#[derive(Debug, Clone, Default)]
pub struct BlockedArray<T> {
    pub data: Vec<T>,
    pub u_res: usize,
    pub v_res: usize,
    pub u_blocks: usize,
}

impl<T> BlockedArray<T>
where
    T: num::Zero + Clone,
{
    pub fn new(u_res: usize, v_res: usize) -> BlockedArray<T> {
        let data = vec![num::Zero::zero(); round_up(u_res) * round_up(v_res)];
        BlockedArray {
            u_res,
            v_res,
            u_blocks: round_up(u_res) >> LOG_BLOCK_SIZE,
            data,
        }
    }
    /// Copy a row-major image of `u_res` by `v_res` texels.
    pub fn new_from(u_res: usize, v_res: usize, d: &[T]) -> BlockedArray<T> {
        let mut ba = Self::new(u_res, v_res);
        for v in 0..v_res {
            for u in 0..u_res {
                ba[(u, v)] = d[v * u_res + u].clone();
            }
        }
        ba
    }
    pub fn u_size(&self) -> usize {
        self.u_res
    }
    pub fn v_size(&self) -> usize {
        self.v_res
    }
    fn block(a: usize) -> usize {
        a >> LOG_BLOCK_SIZE
    }
    fn offset(a: usize) -> usize {
        a & (BLOCK_SIZE - 1)
    }
    fn linear_index(&self, u: usize, v: usize) -> usize {
        BLOCK_SIZE * BLOCK_SIZE * (self.u_blocks * Self::block(v) + Self::block(u))
            + BLOCK_SIZE * Self::offset(v)
            + Self::offset(u)
    }
}

impl<T> Index<(usize, usize)> for BlockedArray<T>
where
    T: num::Zero + Clone,
{
    type Output = T;
    fn index(&self, i: (usize, usize)) -> &T {
        let (u, v) = i;
        &self.data[self.linear_index(u, v)]
    }
}

impl<T> IndexMut<(usize, usize)> for BlockedArray<T>
where
    T: num::Zero + Clone,
{
    fn index_mut(&mut self, i: (usize, usize)) -> &mut T {
        let (u, v) = i;
        let offset = self.linear_index(u, v);
        &mut self.data[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_layout_preserves_texels() {
        let (w, h) = (7_usize, 5_usize);
        let img: Vec<f32> = (0..w * h).map(|i| i as f32).collect();
        let ba = BlockedArray::new_from(w, h, &img);
        assert_eq!(ba.u_size(), w);
        assert_eq!(ba.v_size(), h);
        for v in 0..h {
            for u in 0..w {
                assert_eq!(ba[(u, v)], img[v * w + u]);
            }
        }
    }
}
