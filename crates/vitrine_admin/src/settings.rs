//! Site settings editor.

use crate::feedback;
use vitrine_client::ApiClient;
use vitrine_core::{
    AboutSettings, ContactInfo, DifferentialCard, HeroSettings, Icon, Language, LogoSettings,
    SiteColors, SiteSettings, StatItem, TranslatableText,
};
use vitrine_picker::Notifications;

/// Direction for list reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Toward the start of the list
    Up,
    /// Toward the end of the list
    Down,
}

/// Editor over the single settings document.
///
/// Edits happen on a working copy; [`is_dirty`](Self::is_dirty) compares it
/// with the last loaded or saved version. Saving replaces the whole document.
#[derive(Debug)]
pub struct SettingsEditor {
    client: ApiClient,
    saved: SiteSettings,
    working: SiteSettings,
    loaded: bool,
    busy: bool,
    next_item: u64,
    notifications: Notifications,
}

impl SettingsEditor {
    /// Editor with backend defaults until [`load`](Self::load) runs.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            saved: SiteSettings::default(),
            working: SiteSettings::default(),
            loaded: false,
            busy: false,
            next_item: 0,
            notifications: Notifications::default(),
        }
    }

    /// Working copy.
    pub fn settings(&self) -> &SiteSettings {
        &self.working
    }

    /// A load completed successfully.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// A request is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The working copy differs from the stored document.
    pub fn is_dirty(&self) -> bool {
        self.working != self.saved
    }

    /// Pending notifications.
    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    /// Fetch the document. Missing sections come back as defaults.
    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) {
        self.busy = true;
        let result = self.client.get_settings().await;
        self.busy = false;
        match result {
            Ok(settings) => {
                self.saved = settings.clone();
                self.working = settings;
                self.loaded = true;
            }
            Err(e) => feedback::report(
                &mut self.notifications,
                "Erro ao carregar configurações",
                &e,
            ),
        }
    }

    /// Store the working copy.
    #[tracing::instrument(skip(self))]
    pub async fn save(&mut self) {
        self.busy = true;
        let result = self.client.save_settings(&self.working).await;
        self.busy = false;
        match result {
            Ok(saved) => {
                self.saved = saved.clone();
                self.working = saved;
                feedback::success(&mut self.notifications, "Configurações salvas!");
            }
            Err(e) => feedback::report(
                &mut self.notifications,
                "Erro ao salvar configurações",
                &e,
            ),
        }
    }

    /// Throw away unsaved edits.
    pub fn revert(&mut self) {
        self.working = self.saved.clone();
    }

    /// Hero section.
    pub fn hero_mut(&mut self) -> &mut HeroSettings {
        &mut self.working.hero
    }

    /// About section.
    pub fn about_mut(&mut self) -> &mut AboutSettings {
        &mut self.working.about
    }

    /// Logo sizing.
    pub fn logo_mut(&mut self) -> &mut LogoSettings {
        &mut self.working.logo_settings
    }

    /// Contact details.
    pub fn contact_mut(&mut self) -> &mut ContactInfo {
        &mut self.working.contact
    }

    /// Brand colors.
    pub fn colors_mut(&mut self) -> &mut SiteColors {
        &mut self.working.colors
    }

    /// Whole working copy, for the logo and favicon URLs.
    pub fn settings_mut(&mut self) -> &mut SiteSettings {
        &mut self.working
    }

    /// Default language of the public site.
    pub fn set_default_language(&mut self, language: Language) {
        self.working.set_default_language(language);
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.next_item += 1;
        let taken = |id: &str| {
            self.working.differentials.iter().any(|d| d.id == id)
                || self.working.stats.iter().any(|s| s.id == id)
        };
        let mut id = format!("{}-{}", prefix, self.next_item);
        while taken(&id) {
            self.next_item += 1;
            id = format!("{}-{}", prefix, self.next_item);
        }
        id
    }

    /// Append an empty differential card and return its id.
    pub fn add_differential(&mut self) -> String {
        let id = self.next_id("diff");
        let order = self.working.differentials.len() as i32 + 1;
        self.working.differentials.push(DifferentialCard {
            id: id.clone(),
            icon: Icon::Star.to_string(),
            title: TranslatableText::default(),
            description: TranslatableText::default(),
            order,
        });
        id
    }

    /// Differential card by id.
    pub fn differential_mut(&mut self, id: &str) -> Option<&mut DifferentialCard> {
        self.working.differentials.iter_mut().find(|d| d.id == id)
    }

    /// Remove a differential card; remaining cards are renumbered.
    pub fn remove_differential(&mut self, id: &str) {
        self.working.differentials.retain(|d| d.id != id);
        renumber(&mut self.working.differentials, |d, order| d.order = order);
    }

    /// Move a differential card one place.
    pub fn move_differential(&mut self, id: &str, direction: Move) {
        self.working.differentials.sort_by_key(|d| d.order);
        if let Some(index) = self.working.differentials.iter().position(|d| d.id == id) {
            shift(&mut self.working.differentials, index, direction);
        }
        renumber(&mut self.working.differentials, |d, order| d.order = order);
    }

    /// Append an empty stat and return its id.
    pub fn add_stat(&mut self) -> String {
        let id = self.next_id("stat");
        let order = self.working.stats.len() as i32 + 1;
        self.working.stats.push(StatItem {
            id: id.clone(),
            value: String::new(),
            label: TranslatableText::default(),
            order,
        });
        id
    }

    /// Stat by id.
    pub fn stat_mut(&mut self, id: &str) -> Option<&mut StatItem> {
        self.working.stats.iter_mut().find(|s| s.id == id)
    }

    /// Remove a stat; remaining stats are renumbered.
    pub fn remove_stat(&mut self, id: &str) {
        self.working.stats.retain(|s| s.id != id);
        renumber(&mut self.working.stats, |s, order| s.order = order);
    }

    /// Move a stat one place.
    pub fn move_stat(&mut self, id: &str, direction: Move) {
        self.working.stats.sort_by_key(|s| s.order);
        if let Some(index) = self.working.stats.iter().position(|s| s.id == id) {
            shift(&mut self.working.stats, index, direction);
        }
        renumber(&mut self.working.stats, |s, order| s.order = order);
    }
}

fn shift<T>(items: &mut [T], index: usize, direction: Move) {
    match direction {
        Move::Up if index > 0 => items.swap(index, index - 1),
        Move::Down if index + 1 < items.len() => items.swap(index, index + 1),
        _ => {}
    }
}

fn renumber<T>(items: &mut [T], set: impl Fn(&mut T, i32)) {
    for (index, item) in items.iter_mut().enumerate() {
        set(item, index as i32 + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_client::ClientConfig;

    fn editor() -> SettingsEditor {
        SettingsEditor::new(ApiClient::new(ClientConfig::default()).unwrap())
    }

    #[test]
    fn list_edits_keep_orders_contiguous() {
        let mut editor = editor();
        let first = editor.add_differential();
        let second = editor.add_differential();
        let third = editor.add_differential();

        editor.move_differential(&third, Move::Up);
        let ids: Vec<_> = editor.settings().differentials.iter().map(|d| d.id.clone()).collect();
        assert_eq!(ids, [first.clone(), third.clone(), second.clone()]);

        editor.remove_differential(&first);
        let orders: Vec<_> = editor.settings().differentials.iter().map(|d| d.order).collect();
        assert_eq!(orders, [1, 2]);
        assert!(editor.is_dirty());
    }

    #[test]
    fn moving_past_the_ends_is_a_no_op() {
        let mut editor = editor();
        let only = editor.add_stat();
        editor.move_stat(&only, Move::Up);
        editor.move_stat(&only, Move::Down);
        assert_eq!(editor.settings().stats[0].order, 1);
    }

    #[test]
    fn revert_discards_edits() {
        let mut editor = editor();
        editor.hero_mut().set_title_size(60);
        editor.contact_mut().set_phone("+55 11 0000-0000");
        assert!(editor.is_dirty());
        editor.revert();
        assert!(!editor.is_dirty());
    }
}
