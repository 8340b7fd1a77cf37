//! Audio duration probing via the external ffprobe binary.

use serde::Deserialize;
use std::path::Path;
use tokio::process::Command;

#[derive(Debug, Deserialize)]
struct FFprobeOutput {
    format: Option<FFprobeFormat>,
}

#[derive(Debug, Deserialize)]
struct FFprobeFormat {
    duration: Option<String>,
}

/// Wrapper around ffprobe.
#[derive(Clone)]
pub struct MediaProbe {
    ffprobe_path: String,
}

impl MediaProbe {
    pub fn new(ffprobe_path: String) -> Self {
        Self { ffprobe_path }
    }

    /// Probe the duration of the media file at `path`, in seconds.
    ///
    /// Probing is best-effort: a missing binary, non-zero exit, or
    /// unparsable output is logged and reported as `None`. Uploads never
    /// fail because of the probe.
    pub async fn duration_seconds(&self, path: &Path) -> Option<f64> {
        match self.run_ffprobe(path).await {
            Ok(duration) => duration,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %path.display(),
                    "ffprobe failed, continuing without duration"
                );
                None
            }
        }
    }

    async fn run_ffprobe(&self, path: &Path) -> Result<Option<f64>, anyhow::Error> {
        let output = Command::new(&self.ffprobe_path)
            .args(["-v", "error", "-show_format", "-of", "json"])
            .arg(path)
            .output()
            .await
            .map_err(|e| anyhow::anyhow!("Could not spawn ffprobe: {}", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow::anyhow!("ffprobe failed: {}", stderr.trim()));
        }

        let parsed: FFprobeOutput = serde_json::from_slice(&output.stdout)
            .map_err(|e| anyhow::anyhow!("Unparsable ffprobe output: {}", e))?;

        Ok(parsed
            .format
            .and_then(|f| f.duration)
            .and_then(|d| d.parse::<f64>().ok())
            .filter(|d| d.is_finite() && *d >= 0.0))
    }
}
