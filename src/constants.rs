//! Global constants for the picklist application

/// Number of generated items in the default dataset
pub const DEFAULT_DATASET_SIZE: usize = 100_000;

/// Estimated height of one list row
pub const DEFAULT_ROW_HEIGHT: f32 = picklist_ui::constants::DEFAULT_ROW_HEIGHT;

/// Rows rendered beyond each edge of the visible window
pub const DEFAULT_OVERSCAN: usize = picklist_ui::constants::DEFAULT_OVERSCAN;

/// Maximum height of the scrollable list inside the popup
pub const DEFAULT_LIST_HEIGHT: f32 = picklist_ui::constants::LIST_MAX_HEIGHT;

/// Width of the dropdown control
pub const DEFAULT_CONTROL_WIDTH: f32 = 320.0;

/// Trigger label shown while nothing is selected
pub const PLACEHOLDER: &str = "Select items";

/// Placeholder of the search field
pub const SEARCH_PLACEHOLDER: &str = "Search...";

pub const SELECT_ALL_LABEL: &str = "Select all";
pub const SELECT_NONE_LABEL: &str = "Select none";

/// Page heading above the control
pub const TITLE: &str = "Virtualized multi-select";

/// Environment variable naming a JSON config file (native only)
pub const CONFIG_ENV_VAR: &str = "PICKLIST_CONFIG";

/// Id of the `<script type="application/json">` element holding the web config
pub const CONFIG_ELEMENT_ID: &str = "picklist-config";

/// Font fetched by the web build before the first frame
pub const WEB_FONT_URL: &str = "fonts/DejaVuSans.ttf";

pub mod window {
    /// Initial native window size
    pub const DEFAULT_SIZE: (u32, u32) = (480, 480);
}
