//! TPM 2.0 entropy backend.
//!
//! Draws random bytes from the platform TPM via `TPM2_GetRandom`, one
//! byte per command. The TCTI is taken from the `TPM2TOOLS_TCTI`
//! environment variable when set, falling back to the default device
//! (`/dev/tpm0`).

use super::source::{EntropyError, EntropySource};
use tss_esapi::tcti_ldr::{DeviceConfig, TctiNameConf};
use tss_esapi::Context;

/// Entropy source backed by a TPM 2.0 device.
///
/// The TSS context is held for the lifetime of the source and released
/// on drop, so the handle is closed on every exit path.
pub struct TpmEntropy {
    context: Context,
}

impl TpmEntropy {
    /// Opens a context against the platform TPM.
    pub fn open() -> Result<Self, EntropyError> {
        let tcti = TctiNameConf::from_environment_variable()
            .unwrap_or_else(|_| TctiNameConf::Device(DeviceConfig::default()));
        let context = Context::new(tcti)
            .map_err(|e| EntropyError::Unavailable(format!("failed to open TPM context: {e}")))?;

        tracing::info!("TPM context established");
        Ok(Self { context })
    }
}

impl EntropySource for TpmEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        // One TPM2_GetRandom command per byte, matching the draw
        // granularity of the sampler.
        for slot in buf.iter_mut() {
            let random = self
                .context
                .get_random(1)
                .map_err(|e| EntropyError::Read(format!("TPM2_GetRandom failed: {e}")))?;

            *slot = random
                .value()
                .first()
                .copied()
                .ok_or_else(|| EntropyError::Read("TPM returned an empty buffer".into()))?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "tpm"
    }
}
