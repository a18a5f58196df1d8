use std::fs::{File, OpenOptions};
use std::os::fd::{AsFd, BorrowedFd};
use std::path::Path;

use drm::buffer::{Buffer, DrmFourcc};
use drm::control::dumbbuffer::{DumbBuffer, DumbMapping};
use drm::control::{connector, crtc, framebuffer, Device, Mode};

use crate::display::surface::SurfacePair;
use crate::display::DisplayError;

/// GPU DRM card
#[derive(Debug)]
pub struct Card(File);

impl Card {
    /// Open the DRM card at the given path for reading and writing
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DisplayError> {
        let path = path.as_ref();
        log::debug!("Opening DRM card at: {}", path.display());
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| DisplayError::CardOpen {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self(file))
    }
}

impl AsFd for Card {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.0.as_fd()
    }
}

impl drm::Device for Card {}
impl drm::control::Device for Card {}

/// Where frames get scanned out. Chosen by the modesetting layer before any
/// surfaces are allocated.
#[derive(Debug, Clone, Copy)]
pub struct ScanoutTarget {
    pub crtc: crtc::Handle,
    pub connector: connector::Handle,
    pub mode: Mode,
}

/// A dumb buffer bound to a hardware framebuffer object
#[derive(Debug)]
pub struct DumbSurface {
    pub width: u32,
    pub height: u32,
    pub stride: u32,
    pub size: usize,
    buffer: DumbBuffer,
    framebuffer: framebuffer::Handle,
}

impl DumbSurface {
    fn allocate(
        card: &Card,
        size: (u32, u32),
        format: DrmFourcc,
        depth: u32,
        bpp: u32,
    ) -> Result<Self, DisplayError> {
        let buffer = card.create_dumb_buffer(size, format, bpp)?;
        let framebuffer = match card.add_framebuffer(&buffer, depth, bpp) {
            Ok(fb) => fb,
            Err(e) => {
                if let Err(err) = card.destroy_dumb_buffer(buffer) {
                    log::warn!("Failed to destroy dumb buffer: {err}");
                }
                return Err(e.into());
            }
        };

        let stride = buffer.pitch();
        Ok(Self {
            width: size.0,
            height: size.1,
            stride,
            size: stride as usize * size.1 as usize,
            buffer,
            framebuffer,
        })
    }

    /// Handle of the hardware framebuffer this surface is bound to
    pub fn framebuffer(&self) -> framebuffer::Handle {
        self.framebuffer
    }

    fn release(self, card: &Card) -> Result<(), DisplayError> {
        let fb_result = card.destroy_framebuffer(self.framebuffer);
        card.destroy_dumb_buffer(self.buffer)?;
        fb_result?;
        Ok(())
    }
}

/// A pair of dumb buffer surfaces used for double buffering a single CRTC
#[derive(Debug)]
pub struct DumbSurfaceSet {
    surfaces: SurfacePair<DumbSurface>,
}

impl DumbSurfaceSet {
    /// Allocate two surfaces of the given size and bind them to framebuffer
    /// objects. The size must come from an already-negotiated mode.
    pub fn allocate(
        card: &Card,
        size: (u32, u32),
        format: DrmFourcc,
        depth: u32,
        bpp: u32,
    ) -> Result<Self, DisplayError> {
        log::debug!("Allocating surfaces of {}x{} ({format:?})", size.0, size.1);
        let first = DumbSurface::allocate(card, size, format, depth, bpp)?;
        let second = match DumbSurface::allocate(card, size, format, depth, bpp) {
            Ok(surface) => surface,
            Err(e) => {
                if let Err(err) = first.release(card) {
                    log::warn!("Failed to release surface: {err}");
                }
                return Err(e);
            }
        };

        Ok(Self {
            surfaces: SurfacePair::new(first, second),
        })
    }

    pub fn surfaces(&self) -> &SurfacePair<DumbSurface> {
        &self.surfaces
    }

    pub fn front(&self) -> &DumbSurface {
        self.surfaces.front()
    }

    pub fn back(&self) -> &DumbSurface {
        self.surfaces.back()
    }

    /// Map the back buffer into memory for drawing
    pub fn map_back<'a>(&'a mut self, card: &Card) -> Result<DumbMapping<'a>, DisplayError> {
        let surface = self.surfaces.back_mut();
        Ok(card.map_dumb_buffer(&mut surface.buffer)?)
    }

    /// Scan out the current front buffer on the given target
    pub fn show_front(&self, card: &Card, target: &ScanoutTarget) -> Result<(), DisplayError> {
        let fb = self.surfaces.front().framebuffer;
        set_crtc(card, target, fb)
    }

    /// Scan out the back buffer and make it the new front buffer. The
    /// designation is only swapped if the CRTC accepted the framebuffer.
    pub fn flip(&mut self, card: &Card, target: &ScanoutTarget) -> Result<(), DisplayError> {
        let fb = self.surfaces.back().framebuffer;
        set_crtc(card, target, fb)?;
        self.surfaces.swap();
        log::trace!("Front buffer is now {}", self.surfaces.front_index());
        Ok(())
    }

    /// Destroy both framebuffer objects and dumb buffers. Both surfaces are
    /// released even if the first fails; the first error is returned.
    pub fn release(self, card: &Card) -> Result<(), DisplayError> {
        let [first, second] = self.surfaces.into_inner();
        let first_result = first.release(card);
        let second_result = second.release(card);
        first_result.and(second_result)
    }
}

fn set_crtc(
    card: &Card,
    target: &ScanoutTarget,
    fb: framebuffer::Handle,
) -> Result<(), DisplayError> {
    card.set_crtc(
        target.crtc,
        Some(fb),
        (0, 0),
        &[target.connector],
        Some(target.mode),
    )?;
    Ok(())
}
