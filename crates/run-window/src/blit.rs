//! Frame copy into the host framebuffer.

use run_core::FrameView;

/// Copy an RGBA frame into a same-sized destination buffer, unscaled.
///
/// # Errors
///
/// Rejects views whose pixel data does not match `width * height * 4`
/// bytes, and destination buffers of a different size. Nothing is copied
/// on failure.
pub fn copy_frame(frame: &FrameView<'_>, dest: &mut [u8]) -> Result<(), String> {
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.pixels.len() != expected {
        return Err(format!(
            "frame is {} bytes, expected {} for {}x{} RGBA",
            frame.pixels.len(),
            expected,
            frame.width,
            frame.height,
        ));
    }
    if dest.len() != expected {
        return Err(format!(
            "destination is {} bytes, expected {}",
            dest.len(),
            expected,
        ));
    }
    dest.copy_from_slice(frame.pixels);
    Ok(())
}
