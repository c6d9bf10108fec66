use crate::{
    error::{FormError, LoadError, SaveError},
    fields::{self, FieldDescriptor, FieldGroup},
    form::{self, AvailableSet, FieldValue, FormState, FormValues},
    properties::{self, PropertyMap},
    statics,
    transport::FileTransport,
};
use chrono::NaiveDateTime;
use tracing::{debug, error, info, warn};

/// The server whose file is being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerTarget {
    pub name: String,
}

impl ServerTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone)]
pub struct PageOptions {
    pub filename: String,
    /// Copy the current remote file aside before every save.
    pub backup_before_save: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            filename: statics::PROPERTIES_FILENAME.to_string(),
            backup_before_save: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Form,
    Raw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Unloaded,
    Loaded,
    Editing(EditMode),
    Saved,
    LoadFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Danger,
}

/// User-facing outcome of an action. Never carries internal error detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
}

impl Notification {
    fn success(title: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.to_string(),
        }
    }

    fn danger(title: &str) -> Self {
        Self {
            kind: NotificationKind::Danger,
            title: title.to_string(),
        }
    }
}

/// Edits one server's properties file: load, form/raw editing, save.
///
/// The snapshot (`original_props`, `original_raw`) is the merge base on save so
/// keys the registry doesn't model survive. No locking: the last save wins.
pub struct PropertiesPage<T: FileTransport> {
    server: Option<ServerTarget>,
    transport: T,
    options: PageOptions,
    state: PageState,
    // Set only by a successful load or save; edits never set it.
    loaded: bool,
    form: FormState,
    available: AvailableSet,
    original_props: PropertyMap,
    original_raw: String,
    original_values: FormValues,
}

impl<T: FileTransport> PropertiesPage<T> {
    pub fn new(server: Option<ServerTarget>, transport: T, options: PageOptions) -> Self {
        Self {
            server,
            transport,
            options,
            state: PageState::Unloaded,
            loaded: false,
            form: FormState::default(),
            available: AvailableSet::default(),
            original_props: PropertyMap::new(),
            original_raw: String::new(),
            original_values: FormValues::new(),
        }
    }

    pub fn server(&self) -> Option<&ServerTarget> {
        self.server.as_ref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    /// True once a file has been read and until a later load fails.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn available(&self) -> &AvailableSet {
        &self.available
    }

    pub fn original_props(&self) -> &PropertyMap {
        &self.original_props
    }

    pub fn original_raw(&self) -> &str {
        &self.original_raw
    }

    /// Visibility gate: the page is only offered when the file can be read.
    pub fn can_access(&self) -> bool {
        self.server.is_some() && self.transport.get_content(&self.options.filename).is_ok()
    }

    /// Load the file. Failures reset to an empty form instead of surfacing.
    pub fn mount(&mut self) {
        match self.try_load() {
            Ok(()) => {}
            Err(e) => {
                warn!(error = %error_chain(e), "load failed, resetting form");
                self.reset();
                self.state = PageState::LoadFailed;
            }
        }
    }

    pub fn reload(&mut self) {
        self.mount();
    }

    fn try_load(&mut self) -> Result<(), LoadError> {
        let server = self.server.as_ref().ok_or(LoadError::NoServer)?;
        let filename = &self.options.filename;
        let content = self
            .transport
            .get_content(filename)
            .map_err(|source| LoadError::Read {
                filename: filename.clone(),
                source,
            })?;

        let props = properties::parse(&content);
        info!(
            server = %server.name,
            file = %filename,
            keys = props.len(),
            "loaded properties"
        );

        let values = form::to_form_data(&props);
        self.available = AvailableSet::from_props(&props);
        self.original_values = values.clone();
        self.form = FormState::new(values, content.clone());
        self.original_props = props;
        self.original_raw = content;
        self.state = PageState::Loaded;
        self.loaded = true;
        Ok(())
    }

    fn reset(&mut self) {
        self.loaded = false;
        self.form = FormState::default();
        self.available = AvailableSet::default();
        self.original_props.clear();
        self.original_raw.clear();
        self.original_values.clear();
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), FormError> {
        self.form.set(name, value)?;
        self.mark_editing(EditMode::Form);
        Ok(())
    }

    /// Raw editor changed: re-parse and merge into the structured fields.
    pub fn edit_raw(&mut self, raw: impl Into<String>) {
        self.form.apply_raw(raw);
        debug!(bytes = self.form.raw.len(), "re-synced form from raw text");
        self.mark_editing(EditMode::Raw);
    }

    // An unloaded page keeps its state, so edits alone never make it savable.
    fn mark_editing(&mut self, mode: EditMode) {
        if self.loaded {
            self.state = PageState::Editing(mode);
        }
    }

    /// Fields of `group` whose property key exists in the loaded file.
    pub fn visible_fields(
        &self,
        group: FieldGroup,
    ) -> impl Iterator<Item = &'static FieldDescriptor> + '_ {
        fields::fields_in(group).filter(|f| self.available.contains(f.property_key))
    }

    /// Snapshot entries no registry field maps.
    pub fn unmodeled_properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.original_props
            .iter()
            .filter(|(key, _)| fields::find_by_property(key).is_none())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_dirty(&self) -> bool {
        self.form.raw != self.original_raw || *self.form.values() != self.original_values
    }

    pub fn save(&mut self) -> Notification {
        self.save_at(chrono::Local::now().naive_local())
    }

    /// Save using `now` for the header and backup name.
    pub fn save_at(&mut self, now: NaiveDateTime) -> Notification {
        match self.try_save(now) {
            Ok(()) => Notification::success(statics::EN_NOTIFY_SAVED),
            Err(SaveError::NoServer) => Notification::danger(statics::EN_NOTIFY_INVALID_SERVER),
            Err(e @ SaveError::NotLoaded(_)) => {
                warn!(error = %error_chain(e), "save skipped");
                Notification::danger(statics::EN_NOTIFY_NOT_LOADED)
            }
            Err(e) => {
                error!(error = %error_chain(e), "save failed");
                Notification::danger(statics::EN_NOTIFY_SAVE_FAILED)
            }
        }
    }

    fn try_save(&mut self, now: NaiveDateTime) -> Result<(), SaveError> {
        let server = self.server.as_ref().ok_or(SaveError::NoServer)?;
        let filename = &self.options.filename;
        if !self.loaded {
            return Err(SaveError::NotLoaded(filename.clone()));
        }

        let props = form::to_properties(self.form.values(), &self.original_props, &self.available);
        let content = properties::serialize_at(&props, now);

        if self.options.backup_before_save {
            self.backup(filename, now);
        }

        self.transport
            .put_content(filename, &content)
            .map_err(|source| SaveError::Write {
                filename: filename.clone(),
                source,
            })?;

        info!(
            server = %server.name,
            file = %filename,
            keys = props.len(),
            "saved properties"
        );

        self.original_props = properties::parse(&content);
        self.original_values = self.form.values().clone();
        self.form.raw = content.clone();
        self.original_raw = content;
        self.state = PageState::Saved;
        Ok(())
    }

    /// Best effort: failures are logged and never block the save.
    fn backup(&self, filename: &str, now: NaiveDateTime) {
        let backup_name = properties::backup_file_name(filename, now);
        let current = match self.transport.get_content(filename) {
            Ok(current) => current,
            Err(e) => {
                warn!(
                    file = %filename,
                    step = "read",
                    error = %error_chain(e),
                    "no file to back up, skipping backup"
                );
                return;
            }
        };
        match self.transport.put_content(&backup_name, &current) {
            Ok(()) => info!(file = %backup_name, "wrote backup"),
            Err(e) => warn!(
                file = %backup_name,
                step = "write",
                error = %error_chain(e),
                "backup unwritable, skipping backup"
            ),
        }
    }
}

fn error_chain(e: impl std::error::Error + Send + Sync + 'static) -> String {
    format!("{:#}", anyhow::Error::new(e))
}
