//! FFmpeg Video Provider
//!
//! Assembles a portrait short from narration audio: a background, the audio
//! track, and the opening lines of the script burned in as a caption.
//!
//! The background is the request's own file when given, else a looped Pexels
//! stock clip when a Pexels key is available, else a gradient. A failed
//! Pexels fetch falls back to the gradient.
//!
//! Options: `ffmpeg_path`, `ffprobe_path`, `resolution` (`WIDTHxHEIGHT`),
//! `fps`, `font_size`, `font_file`, `preset`, plus the background options of
//! [`PexelsBackgrounds::from_config`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::process::Command;
use tracing::{debug, info, warn};

use reel_application::ports::registry::{ProviderConfig, ProviderFuture, VIDEO_PROVIDERS, VideoProviderEntry};
use reel_domain::error::{Error, Result};
use reel_domain::ports::VideoProvider;
use reel_domain::value_objects::{CapabilityName, MediaFile, VideoRequest};

use crate::constants::{
    CAPTION_FONT_SIZE, CAPTION_MAX_LINES, CAPTION_WORDS_PER_LINE, VIDEO_DEFAULT_FPS,
    VIDEO_DEFAULT_RESOLUTION, VIDEO_GRADIENT_BOTTOM, VIDEO_GRADIENT_TOP, VIDEO_SUBDIR,
};
use crate::utils::text::short_hash;
use crate::video::pexels::PexelsBackgrounds;

const PROVIDER_NAME: &str = "ffmpeg";

const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Encoding settings
#[derive(Debug, Clone, PartialEq)]
pub struct FfmpegSettings {
    /// `ffmpeg` binary
    pub ffmpeg_path: String,
    /// `ffprobe` binary
    pub ffprobe_path: String,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Frames per second
    pub fps: u32,
    /// Caption font size
    pub font_size: u32,
    /// Caption font file, if any
    pub font_file: Option<String>,
    /// x264 preset
    pub preset: String,
    /// Directory videos are written to
    pub output_dir: PathBuf,
}

impl FfmpegSettings {
    /// Parse settings from provider configuration
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let resolution = config.extra_or("resolution", VIDEO_DEFAULT_RESOLUTION);
        let (width, height) = parse_resolution(resolution).ok_or_else(|| {
            Error::construction(
                config.capability,
                &config.provider,
                format!("invalid resolution '{resolution}', expected WIDTHxHEIGHT"),
            )
        })?;

        Ok(Self {
            ffmpeg_path: config.extra_or("ffmpeg_path", "ffmpeg").to_string(),
            ffprobe_path: config.extra_or("ffprobe_path", "ffprobe").to_string(),
            width,
            height,
            fps: config.extra_parsed("fps", VIDEO_DEFAULT_FPS)?,
            font_size: config.extra_parsed("font_size", CAPTION_FONT_SIZE)?,
            font_file: config.extra.get("font_file").cloned(),
            preset: config.extra_or("preset", "ultrafast").to_string(),
            output_dir: config.output_dir.join(VIDEO_SUBDIR),
        })
    }

    /// `WIDTHxHEIGHT`
    pub fn resolution(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// `"1080x1920"` → `(1080, 1920)`
pub fn parse_resolution(value: &str) -> Option<(u32, u32)> {
    let (w, h) = value.trim().split_once(['x', 'X'])?;
    let width = w.trim().parse().ok()?;
    let height = h.trim().parse().ok()?;
    (width > 0 && height > 0).then_some((width, height))
}

/// Caption text: the script's first words, six per line, at most four lines
pub fn caption_text(script: &str) -> String {
    let words: Vec<&str> = script.split_whitespace().collect();
    words
        .chunks(CAPTION_WORDS_PER_LINE)
        .take(CAPTION_MAX_LINES)
        .map(|line| line.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape a value for use inside an ffmpeg filter argument
fn escape_filter_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | ':' | '\'' | ',' | '[' | ']' | ';') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

/// `ffmpeg` arguments producing `output` from the given inputs
pub fn build_args(
    settings: &FfmpegSettings,
    audio: &Path,
    background: Option<&Path>,
    caption_file: &Path,
    duration: f64,
    output: &Path,
) -> Vec<String> {
    let (w, h, fps) = (settings.width, settings.height, settings.fps);
    let mut args: Vec<String> = vec!["-y".into(), "-hide_banner".into()];

    match background {
        Some(path) if is_image(path) => {
            args.extend(["-loop", "1", "-i"].map(String::from));
            args.push(path.to_string_lossy().into_owned());
        }
        Some(path) => {
            args.extend(["-stream_loop", "-1", "-i"].map(String::from));
            args.push(path.to_string_lossy().into_owned());
        }
        None => {
            args.extend(["-f", "lavfi", "-i"].map(String::from));
            args.push(format!(
                "gradients=s={w}x{h}:c0={VIDEO_GRADIENT_TOP}:c1={VIDEO_GRADIENT_BOTTOM}:x0=0:y0=0:x1=0:y1={h}:r={fps}:d={duration:.3}"
            ));
        }
    }
    args.push("-i".into());
    args.push(audio.to_string_lossy().into_owned());

    let mut drawtext = format!(
        "drawtext=textfile='{}':fontcolor=white:fontsize={}:line_spacing=20:x=(w-text_w)/2:y=(h-text_h)/2:box=1:boxcolor=black@0.4:boxborderw=30",
        escape_filter_value(&caption_file.to_string_lossy()),
        settings.font_size,
    );
    if let Some(font) = &settings.font_file {
        drawtext.push_str(&format!(":fontfile='{}'", escape_filter_value(font)));
    }
    let filter = format!(
        "[0:v]scale={w}:{h}:force_original_aspect_ratio=increase,crop={w}:{h},setsar=1,{drawtext}[v]"
    );

    args.push("-filter_complex".into());
    args.push(filter);
    args.extend(
        [
            "-map", "[v]", "-map", "1:a", "-c:v", "libx264", "-preset",
        ]
        .map(String::from),
    );
    args.push(settings.preset.clone());
    args.extend(["-pix_fmt", "yuv420p", "-r"].map(String::from));
    args.push(fps.to_string());
    args.extend(["-c:a", "aac", "-t"].map(String::from));
    args.push(format!("{duration:.3}"));
    args.push("-shortest".into());
    args.push(output.to_string_lossy().into_owned());
    args
}

/// FFmpeg-based video assembly
pub struct FfmpegVideoProvider {
    settings: FfmpegSettings,
    backgrounds: Option<PexelsBackgrounds>,
}

impl FfmpegVideoProvider {
    /// Create a provider with the given settings and gradient backgrounds
    pub fn new(settings: FfmpegSettings) -> Self {
        Self {
            settings,
            backgrounds: None,
        }
    }

    /// Use Pexels stock clips when the request has no background
    pub fn with_backgrounds(mut self, backgrounds: PexelsBackgrounds) -> Self {
        self.backgrounds = Some(backgrounds);
        self
    }

    /// Background file for `request` and its label; `None` means gradient
    async fn background_for(&self, request: &VideoRequest) -> (Option<PathBuf>, String) {
        if let Some(path) = &request.background {
            return (Some(path.clone()), path.display().to_string());
        }
        let Some(backgrounds) = &self.backgrounds else {
            return (None, "gradient".to_string());
        };
        match backgrounds.fetch_background().await {
            Ok(path) => {
                let label = format!("pexels:{}", path.display());
                (Some(path), label)
            }
            Err(e) => {
                warn!("Pexels background unavailable, using gradient: {e}");
                (None, "gradient".to_string())
            }
        }
    }

    /// Settings in use
    pub fn settings(&self) -> &FfmpegSettings {
        &self.settings
    }

    /// Check that `ffmpeg` can be executed
    pub async fn verify(&self) -> Result<()> {
        let output = Command::new(&self.settings.ffmpeg_path)
            .arg("-version")
            .output()
            .await
            .map_err(|e| {
                Error::construction(
                    CapabilityName::Video,
                    PROVIDER_NAME,
                    format!("Failed to run {}: {e}", self.settings.ffmpeg_path),
                )
            })?;
        if !output.status.success() {
            return Err(Error::construction(
                CapabilityName::Video,
                PROVIDER_NAME,
                format!("{} -version exited with {}", self.settings.ffmpeg_path, output.status),
            ));
        }
        Ok(())
    }

    /// Duration of a media file in seconds
    pub async fn probe_duration(&self, path: &Path) -> Result<f64> {
        let output = Command::new(&self.settings.ffprobe_path)
            .args(["-v", "error", "-show_entries", "format=duration", "-of"])
            .arg("default=noprint_wrappers=1:nokey=1")
            .arg(path)
            .output()
            .await
            .map_err(|e| Error::provider(PROVIDER_NAME, format!("Failed to run ffprobe: {e}")))?;

        if !output.status.success() {
            return Err(Error::provider(
                PROVIDER_NAME,
                format!("ffprobe failed: {}", String::from_utf8_lossy(&output.stderr).trim()),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|d| *d > 0.0)
            .ok_or_else(|| {
                Error::provider(PROVIDER_NAME, format!("ffprobe returned no duration: '{}'", stdout.trim()))
            })
    }

    fn output_path(&self, request: &VideoRequest) -> PathBuf {
        request.output_path.clone().unwrap_or_else(|| {
            self.settings.output_dir.join(format!(
                "short_{}_{}.mp4",
                Utc::now().format("%Y%m%d_%H%M%S"),
                short_hash(&request.script)
            ))
        })
    }
}

#[async_trait]
impl VideoProvider for FfmpegVideoProvider {
    async fn assemble_video(&self, request: &VideoRequest) -> Result<MediaFile> {
        info!("Assembling video with ffmpeg ({})", self.settings.resolution());

        if !tokio::fs::try_exists(&request.audio_path).await.unwrap_or(false) {
            return Err(Error::not_found(format!(
                "audio file {}",
                request.audio_path.display()
            )));
        }

        let duration = self.probe_duration(&request.audio_path).await?;
        let output = self.output_path(request);
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::io_with_source(format!("Failed to create {}", parent.display()), e)
            })?;
        }

        let caption = caption_text(&request.script);
        let caption_file = output.with_extension("captions.txt");
        tokio::fs::write(&caption_file, &caption).await.map_err(|e| {
            Error::io_with_source(format!("Failed to write {}", caption_file.display()), e)
        })?;

        let (background, background_label) = self.background_for(request).await;
        let args = build_args(
            &self.settings,
            &request.audio_path,
            background.as_deref(),
            &caption_file,
            duration,
            &output,
        );
        debug!("ffmpeg {}", args.join(" "));

        let result = Command::new(&self.settings.ffmpeg_path)
            .args(&args)
            .output()
            .await
            .map_err(|e| Error::provider(PROVIDER_NAME, format!("Failed to run ffmpeg: {e}")));
        let _ = tokio::fs::remove_file(&caption_file).await;
        let result = result?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let tail: Vec<&str> = stderr.lines().rev().take(5).collect();
            return Err(Error::provider(
                PROVIDER_NAME,
                format!(
                    "ffmpeg exited with {}: {}",
                    result.status,
                    tail.into_iter().rev().collect::<Vec<_>>().join(" | ")
                ),
            ));
        }

        info!("Video assembled: {} ({:.1}s)", output.display(), duration);
        Ok(MediaFile::new(output, duration, PROVIDER_NAME)
            .with_metadata("resolution", self.settings.resolution())
            .with_metadata("fps", self.settings.fps)
            .with_metadata("background", background_label)
            .with_metadata("caption_lines", caption.lines().count()))
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn ffmpeg_factory(config: &ProviderConfig) -> ProviderFuture<dyn VideoProvider> {
    let config = config.clone();
    Box::pin(async move {
        let mut provider = FfmpegVideoProvider::new(FfmpegSettings::from_config(&config)?);
        provider.verify().await?;
        match PexelsBackgrounds::from_config(&config) {
            Ok(Some(backgrounds)) => provider = provider.with_backgrounds(backgrounds),
            Ok(None) => {}
            Err(e) => warn!("Pexels backgrounds disabled: {e}"),
        }
        let provider: Arc<dyn VideoProvider> = Arc::new(provider);
        Ok(provider)
    })
}

#[linkme::distributed_slice(VIDEO_PROVIDERS)]
static FFMPEG_PROVIDER: VideoProviderEntry = VideoProviderEntry {
    name: PROVIDER_NAME,
    description: "FFmpeg assembly: Pexels, gradient or custom background, narration, captions",
    factory: ffmpeg_factory,
};
