use anyhow::Result;
use std::path::{Path, PathBuf};
use tracer::framebuffer::Framebuffer;

use super::FinalOutput;

pub struct FileOutput {
    /// Tone mapped 8 bits image, format taken from the extension
    pub ldr_path: Option<PathBuf>,
    /// Raw colors, OpenEXR
    pub hdr_path: Option<PathBuf>,
}

impl FileOutput {
    pub fn new(ldr_path: Option<PathBuf>, hdr_path: Option<PathBuf>) -> Self {
        Self { ldr_path, hdr_path }
    }
}

fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(std::fs::create_dir_all(parent)?),
        _ => Ok(()),
    }
}

impl FinalOutput for FileOutput {
    fn commit(&self, framebuffer: &Framebuffer) -> Result<()> {
        if let Some(ref ldr_path) = self.ldr_path {
            create_parent_dir(ldr_path)?;
            log::info!("saving LDR image to {}", ldr_path.display());
            framebuffer.save_ldr(ldr_path)?;
        }
        if let Some(ref hdr_path) = self.hdr_path {
            create_parent_dir(hdr_path)?;
            log::info!("saving HDR image to {}", hdr_path.display());
            framebuffer.save_hdr(hdr_path)?;
        }
        Ok(())
    }
}
