use chrono::{NaiveDate, NaiveDateTime};
use mcprops::{
    AvailableSet, EditMode, FieldValue, FileTransport, NotificationKind, PageOptions, PageState,
    PropertiesPage, ServerTarget, TransportError, fields::FieldGroup, statics,
};
use pretty_assertions::assert_eq;
use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet},
    io,
    path::PathBuf,
};

const FILE: &str = "server.properties";

/// In-memory stand-in for the host's remote file storage.
#[derive(Default)]
struct MemoryTransport {
    files: RefCell<HashMap<String, String>>,
    unreachable: Cell<bool>,
    // Reads fail while writes still succeed.
    unreadable: Cell<bool>,
    read_only: RefCell<HashSet<String>>,
}

impl MemoryTransport {
    fn with_file(content: &str) -> Self {
        let transport = Self::default();
        transport
            .files
            .borrow_mut()
            .insert(FILE.to_string(), content.to_string());
        transport
    }

    fn file(&self, name: &str) -> Option<String> {
        self.files.borrow().get(name).cloned()
    }

    fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.files.borrow().keys().cloned().collect();
        names.sort();
        names
    }
}

impl FileTransport for MemoryTransport {
    fn get_content(&self, filename: &str) -> Result<String, TransportError> {
        let missing = || TransportError::Read {
            path: PathBuf::from(filename),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        if self.unreachable.get() || self.unreadable.get() {
            return Err(missing());
        }
        self.files.borrow().get(filename).cloned().ok_or_else(missing)
    }

    fn put_content(&self, filename: &str, content: &str) -> Result<(), TransportError> {
        if self.unreachable.get() || self.read_only.borrow().contains(filename) {
            return Err(TransportError::Write {
                path: PathBuf::from(filename),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.files
            .borrow_mut()
            .insert(filename.to_string(), content.to_string());
        Ok(())
    }
}

fn ts() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid timestamp")
}

fn page_with(
    transport: MemoryTransport,
    options: PageOptions,
) -> PropertiesPage<MemoryTransport> {
    PropertiesPage::new(Some(ServerTarget::new("survival")), transport, options)
}

fn mounted(content: &str) -> PropertiesPage<MemoryTransport> {
    let mut page = page_with(MemoryTransport::with_file(content), PageOptions::default());
    page.mount();
    page
}

#[test]
fn load_edit_save_end_to_end() {
    let mut page = mounted("motd=Hi\nmax-players=5\n");
    assert_eq!(page.state(), PageState::Loaded);
    assert!(page.can_access());

    let values: Vec<(&str, FieldValue)> = page
        .form()
        .values()
        .iter()
        .map(|(k, v)| (*k, v.clone()))
        .collect();
    assert_eq!(
        values,
        vec![
            ("motd", FieldValue::from("Hi")),
            ("max_players", FieldValue::from("5")),
        ]
    );
    assert_eq!(page.form().raw, "motd=Hi\nmax-players=5\n");
    assert!(!page.is_dirty());

    page.set_field("motd", "Bye").expect("motd is a text field");
    assert_eq!(page.state(), PageState::Editing(EditMode::Form));
    assert!(page.is_dirty());

    let notification = page.save_at(ts());
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.title, statics::EN_NOTIFY_SAVED);

    let written = page.transport().file(FILE).expect("file written");
    assert_eq!(
        written,
        "#Minecraft server properties\n#2024-05-01 12:00:00\nmotd=Bye\nmax-players=5\n"
    );
    assert_eq!(page.state(), PageState::Saved);
    assert_eq!(page.original_raw(), written);
    assert_eq!(page.form().raw, written);
    assert_eq!(page.original_props()["motd"], "Bye");
    assert!(!page.is_dirty());
}

#[test]
fn only_fields_present_in_the_file_are_visible() {
    let page = mounted("motd=Hi\npvp=false\nlevel-name=world\ncustom-key=x\n");

    let names = |group| {
        page.visible_fields(group)
            .map(|f| f.name)
            .collect::<Vec<_>>()
    };
    assert_eq!(names(FieldGroup::Basic), vec!["motd"]);
    assert_eq!(names(FieldGroup::Gameplay), vec!["pvp"]);
    assert_eq!(names(FieldGroup::World), vec!["level_name"]);
    assert!(names(FieldGroup::Network).is_empty());
    assert!(names(FieldGroup::Advanced).is_empty());

    let unmodeled: Vec<(&str, &str)> = page.unmodeled_properties().collect();
    assert_eq!(unmodeled, vec![("custom-key", "x")]);
}

#[test]
fn load_failure_resets_to_empty_form() {
    let mut page = mounted("motd=Hi\n");
    assert_eq!(page.state(), PageState::Loaded);

    page.transport().unreachable.set(true);
    assert!(!page.can_access());
    page.reload();

    assert_eq!(page.state(), PageState::LoadFailed);
    assert!(page.form().values().is_empty());
    assert_eq!(page.form().raw, "");
    assert_eq!(page.available(), &AvailableSet::default());
    assert!(!page.is_loaded());
    assert!(page.original_props().is_empty());
}

#[test]
fn missing_server_fails_load_and_save() {
    let mut page = PropertiesPage::new(
        None,
        MemoryTransport::with_file("motd=Hi\n"),
        PageOptions::default(),
    );
    assert!(!page.can_access());

    page.mount();
    assert_eq!(page.state(), PageState::LoadFailed);

    let notification = page.save_at(ts());
    assert_eq!(notification.kind, NotificationKind::Danger);
    assert_eq!(notification.title, statics::EN_NOTIFY_INVALID_SERVER);
    assert_eq!(page.transport().file(FILE).as_deref(), Some("motd=Hi\n"));
}

#[test]
fn save_without_a_loaded_file_writes_nothing() {
    let mut page = page_with(MemoryTransport::default(), PageOptions::default());
    page.mount();
    assert_eq!(page.state(), PageState::LoadFailed);

    let notification = page.save_at(ts());
    assert_eq!(notification.kind, NotificationKind::Danger);
    assert_eq!(notification.title, statics::EN_NOTIFY_NOT_LOADED);
    assert!(page.transport().file_names().is_empty());
}

#[test]
fn edits_after_a_failed_reload_cannot_wipe_the_file() {
    let content = "motd=Hi\nmax-players=5\ncustom-key=x\n";
    let mut page = mounted(content);
    page.transport().unreachable.set(true);
    page.reload();
    assert_eq!(page.state(), PageState::LoadFailed);
    page.transport().unreachable.set(false);

    page.edit_raw("");
    assert_eq!(page.state(), PageState::LoadFailed);
    assert!(!page.is_loaded());

    let notification = page.save_at(ts());
    assert_eq!(notification.kind, NotificationKind::Danger);
    assert_eq!(notification.title, statics::EN_NOTIFY_NOT_LOADED);
    assert_eq!(page.transport().file(FILE).as_deref(), Some(content));
}

#[test]
fn edits_on_a_never_mounted_page_are_not_saved() {
    let mut page = page_with(MemoryTransport::with_file("motd=Hi\n"), PageOptions::default());
    page.set_field("motd", "Bye").expect("motd");
    assert_eq!(page.state(), PageState::Unloaded);

    let notification = page.save_at(ts());
    assert_eq!(notification.kind, NotificationKind::Danger);
    assert_eq!(notification.title, statics::EN_NOTIFY_NOT_LOADED);
    assert_eq!(page.transport().file_names(), vec![FILE.to_string()]);
    assert_eq!(page.transport().file(FILE).as_deref(), Some("motd=Hi\n"));
}

#[test]
fn failed_write_leaves_state_untouched() {
    let mut page = mounted("motd=Hi\n");
    page.set_field("motd", "Bye").expect("motd");
    page.transport().read_only.borrow_mut().insert(FILE.to_string());

    let notification = page.save_at(ts());

    assert_eq!(notification.kind, NotificationKind::Danger);
    assert_eq!(notification.title, statics::EN_NOTIFY_SAVE_FAILED);
    assert!(page.is_loaded());
    assert!(!notification.title.contains("read-only"));
    assert_eq!(page.state(), PageState::Editing(EditMode::Form));
    assert_eq!(page.form().get("motd"), Some(&FieldValue::from("Bye")));
    assert_eq!(page.original_raw(), "motd=Hi\n");
    assert_eq!(page.original_props()["motd"], "Hi");
    assert_eq!(page.transport().file(FILE).as_deref(), Some("motd=Hi\n"));
    assert!(page.is_dirty());
}

#[test]
fn backup_copies_previous_content_before_saving() {
    let options = PageOptions {
        backup_before_save: true,
        ..PageOptions::default()
    };
    let mut page = page_with(MemoryTransport::with_file("motd=Hi\n"), options);
    page.mount();
    page.set_field("motd", "Bye").expect("motd");

    let notification = page.save_at(ts());

    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(
        page.transport().file_names(),
        vec![
            "server.properties".to_string(),
            "server.properties.bak.20240501_120000".to_string()
        ]
    );
    assert_eq!(
        page.transport()
            .file("server.properties.bak.20240501_120000")
            .as_deref(),
        Some("motd=Hi\n")
    );
}

#[test]
fn failed_backup_does_not_block_save() {
    let options = PageOptions {
        backup_before_save: true,
        ..PageOptions::default()
    };
    let transport = MemoryTransport::with_file("motd=Hi\n");
    transport
        .read_only
        .borrow_mut()
        .insert("server.properties.bak.20240501_120000".to_string());
    let mut page = page_with(transport, options);
    page.mount();

    let notification = page.save_at(ts());

    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(page.transport().file_names(), vec!["server.properties".to_string()]);
}

#[test]
fn unreadable_file_skips_backup_but_still_saves() {
    let options = PageOptions {
        backup_before_save: true,
        ..PageOptions::default()
    };
    let mut page = page_with(MemoryTransport::with_file("motd=Hi\n"), options);
    page.mount();
    page.set_field("motd", "Bye").expect("motd");
    page.transport().unreadable.set(true);

    let notification = page.save_at(ts());

    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(page.transport().file_names(), vec![FILE.to_string()]);
    assert_eq!(
        page.transport().file(FILE).as_deref(),
        Some("#Minecraft server properties\n#2024-05-01 12:00:00\nmotd=Bye\n")
    );
}

#[test]
fn raw_edits_resync_form_and_save_through_form_values() {
    let mut page = mounted("motd=Hi\nmax-players=5\ncustom-key=x\n");

    page.edit_raw("motd=From raw\npvp=on\n");
    assert_eq!(page.state(), PageState::Editing(EditMode::Raw));
    assert_eq!(page.form().get("motd"), Some(&FieldValue::from("From raw")));
    assert_eq!(page.form().get("max_players"), Some(&FieldValue::from("5")));
    assert_eq!(page.form().get("pvp"), Some(&FieldValue::Bool(true)));

    page.save_at(ts());

    // pvp was not in the loaded file, so it stays out; unmodeled keys keep their snapshot value.
    assert_eq!(
        page.transport().file(FILE).as_deref(),
        Some("#Minecraft server properties\n#2024-05-01 12:00:00\nmotd=From raw\nmax-players=5\ncustom-key=x\n")
    );
}

#[test]
fn set_field_rejects_bad_input_without_changing_state() {
    let mut page = mounted("pvp=true\n");
    assert!(page.set_field("pvp", "maybe").is_err());
    assert!(page.set_field("raw", "x").is_err());
    assert_eq!(page.state(), PageState::Loaded);
    assert_eq!(page.form().get("pvp"), Some(&FieldValue::Bool(true)));
}
