/// Two buffer slots for double buffering. One slot is the front buffer
/// (currently presented) and the other is the back buffer (being drawn).
#[derive(Debug, Clone)]
pub struct SurfacePair<B> {
    buffers: [B; 2],
    front: usize,
}

impl<B> SurfacePair<B> {
    /// Create a new pair with the first buffer as the front buffer
    pub fn new(first: B, second: B) -> Self {
        Self {
            buffers: [first, second],
            front: 0,
        }
    }

    /// Index of the slot currently presented
    pub fn front_index(&self) -> usize {
        self.front
    }

    /// Index of the slot currently drawn into
    pub fn back_index(&self) -> usize {
        self.front ^ 1
    }

    pub fn front(&self) -> &B {
        &self.buffers[self.front_index()]
    }

    pub fn back(&self) -> &B {
        &self.buffers[self.back_index()]
    }

    pub fn front_mut(&mut self) -> &mut B {
        let idx = self.front_index();
        &mut self.buffers[idx]
    }

    pub fn back_mut(&mut self) -> &mut B {
        let idx = self.back_index();
        &mut self.buffers[idx]
    }

    /// Exchange the front and back designation
    pub fn swap(&mut self) {
        self.front ^= 1;
    }

    /// Returns both buffers in slot order
    pub fn buffers(&self) -> &[B; 2] {
        &self.buffers
    }

    pub fn into_inner(self) -> [B; 2] {
        self.buffers
    }
}
