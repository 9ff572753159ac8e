// Adapters - External system implementations

pub mod console_prompt;
pub mod exec_shell;
pub mod ffmpeg_locator;
pub mod fs_std;
pub mod ini_config;
#[cfg(test)]
pub mod mock;
pub mod system_clock;

// Re-export adapters
pub use console_prompt::ConsolePrompt;
pub use exec_shell::ShellRunner;
pub use ffmpeg_locator::FfmpegProbe;
pub use fs_std::StdFsAdapter;
pub use ini_config::IniConfigAdapter;
pub use system_clock::SystemClock;
