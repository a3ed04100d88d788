use crate::links::{NavLink, NAV_LINKS};

/// Number of section links that still fit in the compact (mobile) header.
const MOBILE_LINK_COUNT: usize = 3;

/// Whether the viewport is below the `md` breakpoint.
///
/// Before the first measurement (server render, pre-hydration) the viewport is
/// treated as desktop so the server markup and the first client frame agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportClass {
    Mobile,
    #[default]
    Desktop,
}

impl ViewportClass {
    pub fn from_is_mobile(is_mobile: bool) -> Self {
        if is_mobile {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    Desktop,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSelection {
    pub mode: NavMode,
    pub links: &'static [NavLink],
    pub show_color_toggle: bool,
}

/// Picks the header layout for the current viewport.
///
/// `fits_small` is the secondary `sm` breakpoint; it only matters in mobile mode,
/// where the shortened link list is hidden entirely on the narrowest screens.
pub fn select_navigation(viewport: ViewportClass, fits_small: bool) -> NavSelection {
    match viewport {
        ViewportClass::Desktop => NavSelection {
            mode: NavMode::Desktop,
            links: &NAV_LINKS,
            show_color_toggle: true,
        },
        ViewportClass::Mobile => NavSelection {
            mode: NavMode::Mobile,
            links: if fits_small {
                &NAV_LINKS[..MOBILE_LINK_COUNT]
            } else {
                &[]
            },
            show_color_toggle: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(sel: &NavSelection) -> Vec<&'static str> {
        sel.links.iter().map(|l| l.name).collect()
    }

    #[test]
    fn test_desktop_shows_everything() {
        for fits_small in [true, false] {
            let sel = select_navigation(ViewportClass::from_is_mobile(false), fits_small);
            assert_eq!(sel.mode, NavMode::Desktop);
            assert_eq!(
                names(&sel),
                vec!["Home", "About", "Blog", "Projects", "Contact"]
            );
        }
    }

    #[test]
    fn test_mobile_small_shows_prefix() {
        let sel = select_navigation(ViewportClass::from_is_mobile(true), true);
        assert_eq!(sel.mode, NavMode::Mobile);
        assert_eq!(names(&sel), vec!["Home", "About", "Blog"]);
    }

    #[test]
    fn test_mobile_narrow_hides_links() {
        let sel = select_navigation(ViewportClass::Mobile, false);
        assert_eq!(sel.mode, NavMode::Mobile);
        assert!(sel.links.is_empty());
    }

    #[test]
    fn test_color_toggle_always_present() {
        for viewport in [ViewportClass::Mobile, ViewportClass::Desktop] {
            for fits_small in [true, false] {
                assert!(select_navigation(viewport, fits_small).show_color_toggle);
            }
        }
    }

    #[test]
    fn test_selection_is_idempotent() {
        for viewport in [ViewportClass::Mobile, ViewportClass::Desktop] {
            for fits_small in [true, false] {
                let first = select_navigation(viewport, fits_small);
                let second = select_navigation(viewport, fits_small);
                assert_eq!(first, second);
            }
        }
        // the shared sequence is untouched by repeated selection
        assert_eq!(NAV_LINKS.len(), 5);
    }

    #[test]
    fn test_unresolved_viewport_is_desktop() {
        let sel = select_navigation(ViewportClass::default(), false);
        assert_eq!(sel.mode, NavMode::Desktop);
        assert_eq!(sel.links.len(), 5);
    }
}
