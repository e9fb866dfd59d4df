//! Edit sessions
//!
//! An [`EditSession`] is the transient state behind the add/edit form of a
//! grid. Submitting is split into [`EditSession::begin_submit`], which
//! validates and marks the session in flight, and
//! [`EditSession::complete`], which closes it on success or keeps the
//! entered values on failure.

use shared::FieldErrors;
use shared::form::RecordForm;

use crate::http::HttpClient;
use crate::resource::{Resource, ResourceClient};
use crate::{ClientError, ClientResult};

/// Form values plus their submit bookkeeping
#[derive(Debug, Clone)]
pub struct Draft<F> {
    values: F,
    initial: F,
    errors: FieldErrors,
    last_error: Option<String>,
    submitting: bool,
}

impl<F: RecordForm> Draft<F> {
    fn new(values: F) -> Self {
        Self {
            initial: values.clone(),
            values,
            errors: FieldErrors::new(),
            last_error: None,
            submitting: false,
        }
    }

    pub fn values(&self) -> &F {
        &self.values
    }

    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    /// Inline errors from the last validation
    pub fn field_errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Message of the last failed request
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

/// Add/edit form state of one grid
#[derive(Debug, Clone, Default)]
pub enum EditSession<R: Resource> {
    #[default]
    Closed,
    Creating(Draft<R::Form>),
    Editing {
        /// Identity of the record being edited, fixed for the session
        id: String,
        draft: Draft<R::Form>,
    },
}

/// Validated request produced by [`EditSession::begin_submit`]
#[derive(Debug)]
pub enum SubmitRequest<R: Resource> {
    Create(R::Create),
    Update { id: String, payload: R::Update },
}

impl<R: Resource> SubmitRequest<R> {
    /// POST for new records, PUT for existing ones
    pub async fn send<H: HttpClient>(
        self,
        client: &ResourceClient<R, H>,
    ) -> ClientResult<R::Record> {
        match self {
            Self::Create(payload) => client.create(&payload).await,
            Self::Update { id, payload } => client.update(&id, &payload).await,
        }
    }
}

impl<R: Resource> EditSession<R> {
    pub fn new() -> Self {
        Self::Closed
    }

    /// Open an empty form for a new record
    pub fn open_create(&mut self) {
        *self = Self::Creating(Draft::new(R::Form::default()));
    }

    /// Open a form pre-filled from `record`
    pub fn open_edit(&mut self, record: &R::Record) {
        *self = Self::Editing {
            id: R::id(record).to_string(),
            draft: Draft::new(R::Form::from(record)),
        };
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_creating(&self) -> bool {
        matches!(self, Self::Creating(_))
    }

    /// Id of the record under edit
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            Self::Editing { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&Draft<R::Form>> {
        match self {
            Self::Closed => None,
            Self::Creating(draft) | Self::Editing { draft, .. } => Some(draft),
        }
    }

    fn draft_mut(&mut self) -> Option<&mut Draft<R::Form>> {
        match self {
            Self::Closed => None,
            Self::Creating(draft) | Self::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn form(&self) -> Option<&R::Form> {
        self.draft().map(Draft::values)
    }

    pub fn is_dirty(&self) -> bool {
        self.draft().is_some_and(Draft::is_dirty)
    }

    pub fn is_submitting(&self) -> bool {
        self.draft().is_some_and(Draft::is_submitting)
    }

    /// Whether `field` may be edited in the current mode
    pub fn is_read_only(&self, field: &str) -> bool {
        matches!(self, Self::Editing { .. })
            && R::READ_ONLY_WHEN_EDITING.iter().any(|f| *f == field)
    }

    /// Change one form field
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> ClientResult<()> {
        if self.is_read_only(field) {
            return Err(ClientError::ReadOnlyField(field.to_string()));
        }
        let draft = self.draft_mut().ok_or(ClientError::NoSession)?;
        if draft.submitting {
            return Err(ClientError::SubmitInProgress);
        }
        if !draft.values.set_field(field, value.into()) {
            return Err(ClientError::UnknownField(field.to_string()));
        }
        Ok(())
    }

    /// Close unless there are unsaved changes; returns whether it closed
    pub fn close(&mut self) -> bool {
        if self.is_dirty() {
            return false;
        }
        *self = Self::Closed;
        true
    }

    /// Close and drop any unsaved changes
    pub fn discard(&mut self) {
        *self = Self::Closed;
    }

    /// Validate the form and mark the session in flight.
    ///
    /// On validation failure nothing is sent: the field errors are stored
    /// on the draft and returned.
    pub fn begin_submit(&mut self) -> ClientResult<SubmitRequest<R>> {
        let (request, draft) = match self {
            Self::Closed => return Err(ClientError::NoSession),
            Self::Creating(draft) => {
                if draft.submitting {
                    return Err(ClientError::SubmitInProgress);
                }
                (R::create_payload(&draft.values).map(SubmitRequest::Create), draft)
            }
            Self::Editing { id, draft } => {
                if draft.submitting {
                    return Err(ClientError::SubmitInProgress);
                }
                let request = R::update_payload(&draft.values, id).map(|payload| {
                    SubmitRequest::Update {
                        id: id.clone(),
                        payload,
                    }
                });
                (request, draft)
            }
        };

        match request {
            Ok(request) => {
                draft.errors = FieldErrors::new();
                draft.last_error = None;
                draft.submitting = true;
                Ok(request)
            }
            Err(errors) => {
                tracing::debug!(resource = R::NAME, %errors, "form rejected");
                draft.errors = errors.clone();
                Err(ClientError::Validation(errors))
            }
        }
    }

    /// Clear the in-flight flag of a submit whose result will never arrive.
    ///
    /// The entered values stay; the next `begin_submit` is accepted.
    pub fn abandon_submit(&mut self) {
        if let Some(draft) = self.draft_mut()
            && draft.submitting
        {
            tracing::debug!(resource = R::NAME, "submit abandoned");
            draft.submitting = false;
        }
    }

    /// Record the result of a submit started with `begin_submit`
    pub fn complete(&mut self, result: ClientResult<R::Record>) -> ClientResult<R::Record> {
        match result {
            Ok(record) => {
                *self = Self::Closed;
                Ok(record)
            }
            Err(e) => {
                tracing::warn!(resource = R::NAME, error = %e, "submit failed");
                if let Some(draft) = self.draft_mut() {
                    draft.submitting = false;
                    draft.last_error = Some(e.to_string());
                }
                Err(e)
            }
        }
    }
}
