//! Fixed ffmpeg parameter sets

/// Global flags: overwrite output, automatic thread count
pub const GLOBAL_FLAGS: &[&str] = &["-y", "-threads", "0"];

/// CUDA decode for network streams
pub const STREAM_HWACCEL: &[&str] = &[
    "-hwaccel",
    "cuda",
    "-hwaccel_device",
    "0",
    "-extra_hw_frames",
    "3",
];

/// CUDA decode keeping frames on the GPU, for local files
pub const FILE_HWACCEL: &[&str] = &["-hwaccel", "cuda", "-hwaccel_output_format", "cuda"];

/// NVENC rate control shared by every hardware job
const NVENC_RATE_CONTROL: &[&str] = &[
    "-rc", "vbr", "-cq", "20", "-b:v", "8M", "-maxrate", "10M", "-bufsize", "16M",
];

/// libx264 settings used whenever no GPU is available
pub const SOFTWARE_VIDEO: &[&str] = &["-c:v", "libx264", "-preset", "faster", "-crf", "23"];

/// Re-encoded AAC audio
pub const AAC_AUDIO: &[&str] = &["-c:a", "aac", "-b:a", "192k"];

/// Audio passthrough plus a mov_text subtitle stream tagged as Chinese
pub const SUBTITLE_MUX: &[&str] = &[
    "-c:a",
    "copy",
    "-c:s",
    "mov_text",
    "-metadata:s:s:0",
    "language=chi",
];

/// NVENC settings for stream downloads; passes variable frame rate through
pub fn stream_nvenc() -> Vec<&'static str> {
    let mut args = vec!["-c:v", "h264_nvenc", "-preset", "p7"];
    args.extend_from_slice(NVENC_RATE_CONTROL);
    args.extend_from_slice(&["-vsync", "0"]);
    args
}

/// NVENC settings for local files, tuned for quality
pub fn file_nvenc() -> Vec<&'static str> {
    let mut args = vec!["-c:v", "h264_nvenc", "-preset", "p7", "-tune", "hq"];
    args.extend_from_slice(NVENC_RATE_CONTROL);
    args
}
