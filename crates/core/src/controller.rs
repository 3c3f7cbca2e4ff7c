use folio_protocol::{
    ClassToken, DomCommand, PageEvent, PageOutline, ScrollBehavior, SectionBox, StyleProperty,
    Target, TimerId,
};
use log::{debug, error, info, warn};
use rand::Rng;
use rand::rngs::StdRng;

use crate::config::{ConfigError, PortfolioConfig};
use crate::model::nav::closes_on_resize;
use crate::model::{ImagePool, MenuAction, NavState, RevealTracker};
use crate::rules::entrance::entrance_animation;
use crate::rules::form::validate;
use crate::rules::scroll::{
    SCROLL_TOP_BUTTON_CSS, SCROLL_TOP_BUTTON_ID, SCROLL_TOP_BUTTON_LABEL, anchor_fragment,
    current_section, link_targets, navbar_shadow, scroll_top_hover_style, scroll_top_style,
    scroll_top_visible,
};
use crate::rules::video::{extract_video_id, thumbnail_url};
use crate::schedule::TimerTable;

/// Page-wide UI state and the single entry point for page events.
///
/// The controller never touches the DOM. Each call returns the commands the
/// adapter must apply, in order. Events received while detached are ignored.
pub struct UiController<R = StdRng> {
    config: PortfolioConfig,
    outline: PageOutline,
    pool: ImagePool,
    nav: NavState,
    reveal: RevealTracker,
    timers: TimerTable,
    /// Width from the most recent resize, read when the debounce settles.
    pending_width: Option<f64>,
    /// Confirmation text per submission, each waiting on its own timer.
    pending_confirmations: Vec<(u64, String)>,
    next_submission: u64,
    attached: bool,
    rng: R,
}

impl<R: Rng> UiController<R> {
    pub fn new(config: PortfolioConfig, outline: PageOutline, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let pool = ImagePool::new(config.image_dir.clone(), config.image_pool.clone())?;
        let reveal = RevealTracker::new(outline.reveal_count);
        Ok(Self {
            config,
            outline,
            pool,
            nav: NavState::default(),
            reveal,
            timers: TimerTable::new(),
            pending_width: None,
            pending_confirmations: Vec::new(),
            next_submission: 0,
            attached: false,
            rng,
        })
    }

    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_menu_open(&self) -> bool {
        self.nav.is_open()
    }

    /// Start the page lifecycle. Creates the scroll-to-top button.
    pub fn attach(&mut self) -> Vec<DomCommand> {
        if self.attached {
            return Vec::new();
        }
        self.attached = true;
        debug!(
            "attached: {} nav links, {} revealables, {} videos, {} shuffle images",
            self.outline.nav_link_hrefs.len(),
            self.outline.reveal_count,
            self.outline.videos.len(),
            self.outline.shuffle_images,
        );
        vec![DomCommand::CreateScrollTopButton {
            id: SCROLL_TOP_BUTTON_ID.to_string(),
            label: SCROLL_TOP_BUTTON_LABEL.to_string(),
            css: SCROLL_TOP_BUTTON_CSS.to_string(),
        }]
    }

    /// End the page lifecycle: cancel timers, forget menu and reveal state,
    /// and remove the button.
    pub fn detach(&mut self) -> Vec<DomCommand> {
        if !self.attached {
            return Vec::new();
        }
        self.attached = false;
        self.pending_width = None;
        self.pending_confirmations.clear();
        self.nav = NavState::default();
        self.reveal = RevealTracker::new(self.outline.reveal_count);
        let mut commands = self.timers.cancel_all();
        commands.push(DomCommand::RemoveScrollTopButton);
        debug!("detached");
        commands
    }

    pub fn handle(&mut self, event: PageEvent) -> Vec<DomCommand> {
        if !self.attached {
            return Vec::new();
        }
        match event {
            PageEvent::Load => self.on_load(),
            PageEvent::HamburgerClick => self.menu(MenuAction::Toggle),
            PageEvent::MobileCloseClick | PageEvent::NavLinkClick { .. } => {
                self.menu(MenuAction::Close)
            }
            PageEvent::AnchorClick { href } => on_anchor_click(&href),
            PageEvent::Scroll { offset, sections } => self.on_scroll(offset, &sections),
            PageEvent::Resize { width } => self.on_resize(width),
            PageEvent::KeyDown { key } => {
                if key == "Escape" && self.nav.is_open() {
                    self.menu(MenuAction::Close)
                } else {
                    Vec::new()
                }
            }
            PageEvent::Intersection {
                index,
                is_intersecting,
            } => {
                if self.reveal.observe(index, is_intersecting) {
                    vec![
                        DomCommand::SetClass {
                            target: Target::Revealable(index),
                            class: ClassToken::FadeInUp,
                            enabled: true,
                        },
                        DomCommand::Unobserve { index },
                    ]
                } else {
                    Vec::new()
                }
            }
            PageEvent::Submit {
                name,
                email,
                message,
            } => self.on_submit(&name, &email, &message),
            PageEvent::ScrollTopClick => vec![DomCommand::ScrollToTop {
                behavior: ScrollBehavior::Smooth,
            }],
            PageEvent::ScrollTopHover { hovered } => {
                let (background, transform) = scroll_top_hover_style(hovered);
                vec![
                    style(Target::ScrollTopButton, StyleProperty::BackgroundColor, background),
                    style(Target::ScrollTopButton, StyleProperty::Transform, transform),
                ]
            }
            PageEvent::TimerFired { timer, generation } => {
                if self.timers.fire(timer, generation) {
                    self.on_timer(timer)
                } else {
                    debug!("dropped stale {timer:?} fire (generation {generation})");
                    Vec::new()
                }
            }
        }
    }

    fn menu(&mut self, action: MenuAction) -> Vec<DomCommand> {
        if !self.outline.has_menu() {
            return Vec::new();
        }
        self.nav = self.nav.apply(action);
        self.nav.marker_commands().to_vec()
    }

    fn on_scroll(&mut self, offset: f64, sections: &[SectionBox]) -> Vec<DomCommand> {
        let mut commands = Vec::with_capacity(self.outline.nav_link_hrefs.len() + 3);

        if self.outline.has_navbar {
            let shadow = navbar_shadow(offset, self.config.navbar_shadow_threshold);
            commands.push(style(Target::Navbar, StyleProperty::BoxShadow, shadow.css()));
        }

        let current = current_section(offset, sections, self.config.section_lead);
        for (i, href) in self.outline.nav_link_hrefs.iter().enumerate() {
            commands.push(DomCommand::SetClass {
                target: Target::NavLink(i),
                class: ClassToken::Active,
                enabled: link_targets(href, current),
            });
        }

        let (opacity, visibility) =
            scroll_top_style(scroll_top_visible(offset, self.config.scroll_top_threshold));
        commands.push(style(Target::ScrollTopButton, StyleProperty::Opacity, opacity));
        commands.push(style(
            Target::ScrollTopButton,
            StyleProperty::Visibility,
            visibility,
        ));
        commands
    }

    fn on_resize(&mut self, width: f64) -> Vec<DomCommand> {
        if !self.outline.has_menu() {
            return Vec::new();
        }
        self.pending_width = Some(width);
        vec![
            self.timers
                .schedule(TimerId::ResizeSettle, self.config.resize_debounce_ms, false),
        ]
    }

    fn on_submit(&mut self, name: &str, email: &str, message: &str) -> Vec<DomCommand> {
        match validate(name, email, message) {
            Ok(submission) => {
                self.next_submission += 1;
                let id = self.next_submission;
                info!("contact form passed validation, submitting (#{id})");
                self.pending_confirmations
                    .push((id, submission.confirmation()));
                vec![self.timers.schedule(
                    TimerId::ConfirmSubmission { submission: id },
                    self.config.confirm_delay_ms,
                    false,
                )]
            }
            Err(e) => vec![
                DomCommand::PreventDefault,
                DomCommand::Alert {
                    message: e.to_string(),
                },
            ],
        }
    }

    fn on_timer(&mut self, timer: TimerId) -> Vec<DomCommand> {
        match timer {
            TimerId::ResizeSettle => match self.pending_width.take() {
                Some(width) if closes_on_resize(self.nav, width, self.config.menu_breakpoint) => {
                    self.menu(MenuAction::Close)
                }
                _ => Vec::new(),
            },
            TimerId::ConfirmSubmission { submission } => {
                let Some(pos) = self
                    .pending_confirmations
                    .iter()
                    .position(|(id, _)| *id == submission)
                else {
                    return Vec::new();
                };
                let (_, message) = self.pending_confirmations.remove(pos);
                vec![DomCommand::Alert { message }]
            }
            TimerId::ShuffleImages => self.shuffle_images(),
        }
    }

    fn on_load(&mut self) -> Vec<DomCommand> {
        let mut commands = Vec::new();

        for part in &self.outline.hero_parts {
            let (animation, starts_hidden) = entrance_animation(*part);
            commands.push(style(Target::Hero(*part), StyleProperty::Animation, animation));
            if starts_hidden {
                commands.push(style(Target::Hero(*part), StyleProperty::Opacity, "0"));
            }
        }

        commands.extend(self.video_thumbnails());
        commands.extend(self.shuffle_images());
        commands.push(self.timers.schedule(
            TimerId::ShuffleImages,
            self.config.shuffle_interval_ms,
            true,
        ));
        commands
    }

    fn video_thumbnails(&self) -> Vec<DomCommand> {
        let mut commands = Vec::new();
        for (i, slot) in self.outline.videos.iter().enumerate() {
            let id = extract_video_id(&slot.source);
            info!(
                "video {}: url={:?}, id={:?}",
                i + 1,
                slot.source,
                id.as_ref().map_or("", |id| id.as_str())
            );
            let Some(id) = id else {
                error!("could not extract video id from: {}", slot.source);
                continue;
            };
            if !slot.has_thumbnail {
                warn!("no thumbnail image for video {}", i + 1);
                continue;
            }
            let src = thumbnail_url(&self.config.thumbnail_template, &id);
            debug!("setting thumbnail url: {src}");
            let target = Target::VideoThumbnail(i);
            commands.push(DomCommand::SetImageSource {
                target: target.clone(),
                src,
            });
            commands.push(style(target.clone(), StyleProperty::Width, "100%"));
            commands.push(style(target.clone(), StyleProperty::Height, "100%"));
            commands.push(style(target, StyleProperty::ObjectFit, "cover"));
        }
        commands
    }

    fn shuffle_images(&mut self) -> Vec<DomCommand> {
        let mut commands = Vec::with_capacity(self.outline.shuffle_images * 5);
        for i in 0..self.outline.shuffle_images {
            let target = Target::ShuffleImage(i);
            commands.push(DomCommand::SetImageSource {
                target: target.clone(),
                src: self.pool.pick(&mut self.rng),
            });
            commands.push(style(target.clone(), StyleProperty::Width, "100%"));
            commands.push(style(target.clone(), StyleProperty::Height, "auto"));
            commands.push(style(target.clone(), StyleProperty::ObjectFit, "cover"));
            commands.push(style(target, StyleProperty::Display, "block"));
        }
        commands
    }
}

fn on_anchor_click(href: &str) -> Vec<DomCommand> {
    let mut commands = vec![DomCommand::PreventDefault];
    if let Some(id) = anchor_fragment(href) {
        commands.push(DomCommand::ScrollIntoView {
            id: id.to_string(),
            behavior: ScrollBehavior::Smooth,
        });
    }
    commands
}

fn style(target: Target, property: StyleProperty, value: &str) -> DomCommand {
    DomCommand::SetStyle {
        target,
        property,
        value: value.to_string(),
    }
}
