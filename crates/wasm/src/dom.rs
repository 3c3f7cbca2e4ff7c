use folio_protocol::{HeroPart, PageOutline, SectionBox, Target, VideoSlot};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

/// Elements found on the page at attach time, addressed by [`Target`].
pub(crate) struct DomHandles {
    pub hamburger: Option<HtmlElement>,
    pub nav_menu: Option<HtmlElement>,
    pub mobile_close: Option<HtmlElement>,
    pub navbar: Option<HtmlElement>,
    pub contact_form: Option<HtmlElement>,
    pub nav_links: Vec<HtmlElement>,
    /// Every `a[href^="#"]`, nav links included.
    pub anchors: Vec<HtmlElement>,
    pub hero: Vec<(HeroPart, HtmlElement)>,
    pub revealables: Vec<HtmlElement>,
    video_sources: Vec<String>,
    video_thumbnails: Vec<Option<HtmlElement>>,
    shuffle_images: Vec<HtmlElement>,
    sections: Vec<HtmlElement>,
}

impl DomHandles {
    pub fn discover(document: &Document) -> Result<Self, JsValue> {
        let by_id = |id: &str| {
            document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        };

        let mut hero = Vec::new();
        for part in HeroPart::ALL {
            if let Some(el) = query_one(document, part.selector())? {
                hero.push((part, el));
            }
        }

        let mut video_sources = Vec::new();
        let mut video_thumbnails = Vec::new();
        for container in query_all(document, "[data-video]")? {
            video_sources.push(container.get_attribute("data-video").unwrap_or_default());
            video_thumbnails.push(child(&container, ".video-thumbnail")?);
        }

        let mut shuffle_images = Vec::new();
        for card in query_all(document, "[data-shuffle-img]")? {
            if let Some(img) = child(&card, ".shuffle-image")? {
                shuffle_images.push(img);
            }
        }

        Ok(Self {
            hamburger: by_id("hamburger"),
            nav_menu: by_id("navMenu"),
            mobile_close: by_id("mobileClose"),
            navbar: query_one(document, ".navbar")?,
            contact_form: by_id("contactForm"),
            nav_links: query_all(document, ".nav-link")?,
            anchors: query_all(document, "a[href^=\"#\"]")?,
            hero,
            revealables: query_all(document, ".project-card, .experience-card, .skill-category")?,
            video_sources,
            video_thumbnails,
            shuffle_images,
            sections: query_all(document, "section")?,
        })
    }

    pub fn outline(&self) -> PageOutline {
        PageOutline {
            has_hamburger: self.hamburger.is_some(),
            has_nav_menu: self.nav_menu.is_some(),
            has_navbar: self.navbar.is_some(),
            nav_link_hrefs: self
                .nav_links
                .iter()
                .map(|a| a.get_attribute("href").unwrap_or_default())
                .collect(),
            hero_parts: self.hero.iter().map(|(part, _)| *part).collect(),
            reveal_count: self.revealables.len(),
            videos: self
                .video_sources
                .iter()
                .zip(&self.video_thumbnails)
                .map(|(source, thumb)| VideoSlot {
                    source: source.clone(),
                    has_thumbnail: thumb.is_some(),
                })
                .collect(),
            shuffle_images: self.shuffle_images.len(),
        }
    }

    /// Resolve a target. The scroll-to-top button is owned by the page, so it
    /// is passed in rather than looked up here.
    pub fn element<'a>(
        &'a self,
        target: &Target,
        scroll_top: Option<&'a HtmlElement>,
    ) -> Option<&'a HtmlElement> {
        match target {
            Target::Hamburger => self.hamburger.as_ref(),
            Target::NavMenu => self.nav_menu.as_ref(),
            Target::Navbar => self.navbar.as_ref(),
            Target::NavLink(i) => self.nav_links.get(*i),
            Target::Hero(part) => self
                .hero
                .iter()
                .find(|(p, _)| p == part)
                .map(|(_, el)| el),
            Target::ScrollTopButton => scroll_top,
            Target::Revealable(i) => self.revealables.get(*i),
            Target::VideoThumbnail(i) => self.video_thumbnails.get(*i).and_then(Option::as_ref),
            Target::ShuffleImage(i) => self.shuffle_images.get(*i),
        }
    }

    /// Current `(id, offsetTop)` of every section, in document order.
    pub fn section_boxes(&self) -> Vec<SectionBox> {
        self.sections
            .iter()
            .map(|s| SectionBox::new(s.id(), f64::from(s.offset_top())))
            .collect()
    }

    pub fn revealable_index(&self, element: &Element) -> Option<usize> {
        self.revealables
            .iter()
            .position(|el| AsRef::<Element>::as_ref(el) == element)
    }
}

fn query_one(document: &Document, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

fn child(parent: &Element, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(parent
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// Read the `value` of a form control by id, whatever its element type.
pub(crate) fn field_value(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| js_sys::Reflect::get(&el, &JsValue::from_str("value")).ok())
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}
