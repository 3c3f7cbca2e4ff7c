use folio_protocol::HeroPart;

/// CSS `animation` for a hero element, and whether it starts transparent
/// until the animation fills in.
pub fn entrance_animation(part: HeroPart) -> (&'static str, bool) {
    match part {
        HeroPart::Title => ("slideInLeft 0.8s ease-out", false),
        HeroPart::Subtitle => ("fadeInUp 0.8s ease-out 0.2s forwards", true),
        HeroPart::Description => ("fadeInUp 0.8s ease-out 0.4s forwards", true),
        HeroPart::Cta => ("fadeInUp 0.8s ease-out 0.6s forwards", true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_title_stays_visible() {
        let hidden: Vec<_> = HeroPart::ALL
            .iter()
            .map(|p| entrance_animation(*p).1)
            .collect();
        assert_eq!(hidden, vec![false, true, true, true]);
    }

    #[test]
    fn delays_are_staggered() {
        assert!(entrance_animation(HeroPart::Subtitle).0.contains(" 0.2s "));
        assert!(entrance_animation(HeroPart::Description).0.contains(" 0.4s "));
        assert!(entrance_animation(HeroPart::Cta).0.contains(" 0.6s "));
    }
}
