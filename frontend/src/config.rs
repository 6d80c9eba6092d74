pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Trunk (development) and nginx (production) both proxy the API on the
        // same origin, so relative URLs work everywhere.
        "".to_string()
    }

    /// Lifetime of a transient toast, in milliseconds.
    pub fn toast_duration_ms() -> u32 {
        5000
    }
}

/// What the screen tells the user after a Save whose commit failed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaveFailurePolicy {
    /// Show "Submission successful" regardless of the outcome. This is the
    /// long-standing behaviour of the screen.
    #[default]
    ReportSuccess,
    /// Show an error toast with the failure reason instead.
    SurfaceError,
}
