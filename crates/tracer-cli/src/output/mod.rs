mod file_output;

use anyhow::Result;
pub use file_output::FileOutput;
use tracer::framebuffer::Framebuffer;

/// Somewhere a finished render goes
pub trait FinalOutput: Send {
    fn commit(&self, framebuffer: &Framebuffer) -> Result<()>;
}
