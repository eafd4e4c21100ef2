/// What the sidebar is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarContentType {
    #[default]
    Cart,
    Filters,
    Account,
}

impl SidebarContentType {
    pub fn title(&self) -> &'static str {
        match self {
            SidebarContentType::Cart => "Cart",
            SidebarContentType::Filters => "Filters",
            SidebarContentType::Account => "Account",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub open: bool,
    pub content_type: SidebarContentType,
}

impl SidebarState {
    /// Open with the given content; opening the content already shown closes it
    pub fn toggle(&mut self, content_type: SidebarContentType) {
        if self.open && self.content_type == content_type {
            self.open = false;
        } else {
            self.open = true;
            self.content_type = content_type;
        }
    }

    pub fn open(&mut self, content_type: SidebarContentType) {
        self.open = true;
        self.content_type = content_type;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_switches_content_then_closes() {
        let mut sidebar = SidebarState::default();

        sidebar.toggle(SidebarContentType::Filters);
        assert!(sidebar.open);
        assert_eq!(sidebar.content_type, SidebarContentType::Filters);

        sidebar.toggle(SidebarContentType::Cart);
        assert!(sidebar.open);
        assert_eq!(sidebar.content_type, SidebarContentType::Cart);

        sidebar.toggle(SidebarContentType::Cart);
        assert!(!sidebar.open);
    }

    #[test]
    fn close_keeps_last_content() {
        let mut sidebar = SidebarState::default();
        sidebar.open(SidebarContentType::Account);
        sidebar.close();

        assert!(!sidebar.open);
        assert_eq!(sidebar.content_type, SidebarContentType::Account);
    }
}
