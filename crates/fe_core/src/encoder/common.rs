//! Shared helpers for feature assembly

/// Sequential writer over a fixed-size feature buffer
pub(crate) struct FeatureWriter<'a> {
    buf: &'a mut [f32],
    pos: usize,
}

impl<'a> FeatureWriter<'a> {
    pub(crate) fn new(buf: &'a mut [f32]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    pub(crate) fn push(&mut self, v: f32) {
        self.buf[self.pos] = v;
        self.pos += 1;
    }

    #[inline]
    pub(crate) fn extend(&mut self, vs: &[f32]) {
        self.buf[self.pos..self.pos + vs.len()].copy_from_slice(vs);
        self.pos += vs.len();
    }

    pub(crate) fn extend_scaled(&mut self, vs: &[f32], scale: f32) {
        for &v in vs {
            self.push(v * scale);
        }
    }

    /// Asserts (debug builds) that the layout filled the buffer exactly
    pub(crate) fn finish(self) {
        debug_assert_eq!(self.pos, self.buf.len(), "feature layout does not match buffer width");
    }
}

/// Indices `0..N+1` with `skip` removed, order preserved
pub(crate) fn indices_without<const N: usize>(skip: usize) -> [usize; N] {
    std::array::from_fn(|k| if k < skip { k } else { k + 1 })
}
