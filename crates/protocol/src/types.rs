use serde::{Deserialize, Serialize};

/// Addresses a DOM element the adapter discovered at attach time.
///
/// Indexed variants refer to positions in the matching [`PageOutline`]
/// list, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Hamburger,
    NavMenu,
    Navbar,
    NavLink(usize),
    Hero(HeroPart),
    ScrollTopButton,
    /// A `.project-card`, `.experience-card` or `.skill-category` element.
    Revealable(usize),
    /// The `.video-thumbnail` image inside the n-th `[data-video]` element.
    VideoThumbnail(usize),
    /// The `.shuffle-image` inside the n-th `[data-shuffle-img]` card.
    ShuffleImage(usize),
}

/// The four hero elements animated on window load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroPart {
    Title,
    Subtitle,
    Description,
    Cta,
}

impl HeroPart {
    pub const ALL: [HeroPart; 4] = [
        HeroPart::Title,
        HeroPart::Subtitle,
        HeroPart::Description,
        HeroPart::Cta,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            HeroPart::Title => ".hero-title",
            HeroPart::Subtitle => ".hero-subtitle",
            HeroPart::Description => ".hero-description",
            HeroPart::Cta => ".hero-cta",
        }
    }
}

/// Browser timers owned by the adapter on behalf of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerId {
    /// Debounced resize handling.
    ResizeSettle,
    /// Optimistic "message sent" alert for one valid submit. Each submit
    /// gets its own timer, so earlier confirmations are never superseded.
    ConfirmSubmission { submission: u64 },
    /// Repeating image rotation.
    ShuffleImages,
}

/// A `section[id]` and its distance from the top of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBox {
    pub id: String,
    pub offset_top: f64,
}

impl SectionBox {
    pub fn new(id: impl Into<String>, offset_top: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
        }
    }
}

/// One `[data-video]` container found on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSlot {
    /// Raw `data-video` attribute value.
    pub source: String,
    /// Whether a `.video-thumbnail` child exists.
    pub has_thumbnail: bool,
}

/// Snapshot of the page structure taken once at attach time.
///
/// Optional elements are recorded as flags so the controller can disable
/// features whose elements are missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageOutline {
    pub has_hamburger: bool,
    pub has_nav_menu: bool,
    pub has_navbar: bool,
    /// `href` of every `.nav-link`, empty when the attribute is absent.
    pub nav_link_hrefs: Vec<String>,
    pub hero_parts: Vec<HeroPart>,
    pub reveal_count: usize,
    pub videos: Vec<VideoSlot>,
    /// Number of `[data-shuffle-img]` cards that contain a `.shuffle-image`.
    pub shuffle_images: usize,
}

impl PageOutline {
    /// Whether the menu toggle can operate: both marker nodes must exist.
    pub fn has_menu(&self) -> bool {
        self.has_hamburger && self.has_nav_menu
    }
}
