//! Top-level navigation between the two list screens.

/// Screens reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Animals,
    Cares,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Animals, Route::Cares];

    /// Resolve a location path. Unknown paths land on the animals screen.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/cuidados" => Route::Cares,
            _ => Route::Animals,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Animals => "/",
            Route::Cares => "/cuidados",
        }
    }

    /// Navigation label
    pub fn title(&self) -> &'static str {
        match self {
            Route::Animals => "Animals",
            Route::Cares => "Cares",
        }
    }
}
