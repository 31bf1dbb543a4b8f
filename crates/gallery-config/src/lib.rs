use cosmic::cosmic_config::{self, Config, ConfigGet, ConfigSet, CosmicConfigEntry};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CONFIG_VERSION: u64 = 1;
const APP_ID: &str = "org.codeberg.bhh32.Rotunda";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AppTheme {
    #[default]
    System,
    Dark,
    Light,
}

impl AppTheme {
    pub const ALL: &'static [Self] = &[Self::System, Self::Dark, Self::Light];

    pub fn to_cosmic_theme(self) -> cosmic::Theme {
        use cosmic::cosmic_theme::ThemeBuilder;
        use std::sync::Arc;

        match self {
            AppTheme::System => cosmic::theme::system_preference(),
            AppTheme::Dark => cosmic::Theme::custom(Arc::new(ThemeBuilder::dark().build())),
            AppTheme::Light => cosmic::Theme::custom(Arc::new(ThemeBuilder::light().build())),
        }
    }
}

impl fmt::Display for AppTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppTheme::System => write!(f, "System"),
            AppTheme::Dark => write!(f, "Dark"),
            AppTheme::Light => write!(f, "Light"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThumbnailSize {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl ThumbnailSize {
    pub fn pixels(self) -> u32 {
        match self {
            ThumbnailSize::Small => 64,
            ThumbnailSize::Medium => 128,
            ThumbnailSize::Large => 192,
            ThumbnailSize::XLarge => 256,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortMode {
    #[default]
    Name,
    Date,
    Size,
}

impl SortMode {
    pub const ALL: &'static [Self] = &[Self::Name, Self::Date, Self::Size];
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Name => write!(f, "Name"),
            SortMode::Date => write!(f, "Date"),
            SortMode::Size => write!(f, "Size"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub const ALL: &'static [Self] = &[Self::Ascending, Self::Descending];

    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "Ascending"),
            SortOrder::Descending => write!(f, "Descending"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    pub app_theme: AppTheme,
    pub thumbnail_size: ThumbnailSize,
    pub sort_mode: SortMode,
    pub sort_order: SortOrder,
    pub show_hidden_files: bool,
    pub remember_last_dir: bool,
    pub last_dir: Option<String>,
    pub cache_size: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::default(),
            thumbnail_size: ThumbnailSize::default(),
            sort_mode: SortMode::default(),
            sort_order: SortOrder::default(),
            show_hidden_files: false,
            remember_last_dir: true,
            last_dir: None,
            cache_size: 20,
        }
    }
}

impl CosmicConfigEntry for GalleryConfig {
    const VERSION: u64 = CONFIG_VERSION;

    fn write_entry(&self, config: &cosmic_config::Config) -> Result<(), cosmic_config::Error> {
        config.set("app_theme", self.app_theme)?;
        config.set("thumbnail_size", self.thumbnail_size)?;
        config.set("sort_mode", self.sort_mode)?;
        config.set("sort_order", self.sort_order)?;
        config.set("show_hidden_files", self.show_hidden_files)?;
        config.set("remember_last_dir", self.remember_last_dir)?;
        config.set("last_dir", self.last_dir.clone())?;
        config.set("cache_size", self.cache_size)?;
        Ok(())
    }

    fn get_entry(
        config: &cosmic_config::Config,
    ) -> Result<Self, (Vec<cosmic_config::Error>, Self)> {
        let mut errors = Vec::new();
        let mut cfg = GalleryConfig::default();

        macro_rules! get_field {
            ($name:literal, $field:ident, $type:ty) => {
                match config.get::<$type>($name) {
                    Ok(val) => cfg.$field = val,
                    Err(e) => errors.push(e),
                }
            };
        }

        get_field!("app_theme", app_theme, AppTheme);
        get_field!("thumbnail_size", thumbnail_size, ThumbnailSize);
        get_field!("sort_mode", sort_mode, SortMode);
        get_field!("sort_order", sort_order, SortOrder);
        get_field!("show_hidden_files", show_hidden_files, bool);
        get_field!("remember_last_dir", remember_last_dir, bool);
        get_field!("last_dir", last_dir, Option<String>);
        get_field!("cache_size", cache_size, usize);

        if errors.is_empty() {
            Ok(cfg)
        } else {
            Err((errors, cfg))
        }
    }

    fn update_keys<T: AsRef<str>>(
        &mut self,
        config: &cosmic_config::Config,
        changed_keys: &[T],
    ) -> (Vec<cosmic_config::Error>, Vec<&'static str>) {
        let mut errors = Vec::new();
        let mut updated = Vec::new();

        for key in changed_keys {
            match key.as_ref() {
                "thumbnail_size" => match config.get::<ThumbnailSize>("thumbnail_size") {
                    Ok(val) => {
                        self.thumbnail_size = val;
                        updated.push("thumbnail_size");
                    }
                    Err(e) => errors.push(e),
                },
                "sort_mode" => match config.get::<SortMode>("sort_mode") {
                    Ok(val) => {
                        self.sort_mode = val;
                        updated.push("sort_mode");
                    }
                    Err(e) => errors.push(e),
                },
                "sort_order" => match config.get::<SortOrder>("sort_order") {
                    Ok(val) => {
                        self.sort_order = val;
                        updated.push("sort_order");
                    }
                    Err(e) => errors.push(e),
                },
                "show_hidden_files" => match config.get::<bool>("show_hidden_files") {
                    Ok(val) => {
                        self.show_hidden_files = val;
                        updated.push("show_hidden_files");
                    }
                    Err(e) => errors.push(e),
                },
                _ => {}
            }
        }

        (errors, updated)
    }
}

pub fn config() -> Result<Config, cosmic_config::Error> {
    Config::new(APP_ID, CONFIG_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let cfg = GalleryConfig::default();
        assert_eq!(cfg.app_theme, AppTheme::System);
        assert_eq!(cfg.thumbnail_size, ThumbnailSize::Medium);
        assert_eq!(cfg.sort_mode, SortMode::Name);
        assert_eq!(cfg.sort_order, SortOrder::Ascending);
        assert!(!cfg.show_hidden_files);
        assert!(cfg.remember_last_dir);
        assert!(cfg.last_dir.is_none());
        assert!(cfg.cache_size > 0);
    }

    #[test]
    fn sort_order_toggles() {
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
    }

    #[test]
    fn thumbnail_sizes_increase() {
        let mut last = 0;
        for size in [
            ThumbnailSize::Small,
            ThumbnailSize::Medium,
            ThumbnailSize::Large,
            ThumbnailSize::XLarge,
        ] {
            assert!(size.pixels() > last);
            last = size.pixels();
        }
    }
}
