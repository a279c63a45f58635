/// The two mutually exclusive top-level display modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    AllRepos,
    RecentActivity,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::AllRepos => write!(f, "repos"),
            View::RecentActivity => write!(f, "activity"),
        }
    }
}

impl std::str::FromStr for View {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "repos" | "all" => Ok(View::AllRepos),
            "activity" | "recent" => Ok(View::RecentActivity),
            _ => anyhow::bail!("Unknown view: {}. Expected repos or activity.", s),
        }
    }
}
