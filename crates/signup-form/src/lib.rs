//! Signup Form Controller
//!
//! Headless controller for a signup form: per-field validation, an error
//! summary, a locally persisted draft, phone normalization and submission to
//! a remote endpoint.
//!
//! # Architecture
//!
//! ```text
//!  input / blur / toggle / submit
//!            │
//!  ┌─────────▼─────────┐      ┌──────────────┐
//!  │   Field Registry  │◄────►│  Debouncers  │  live validation, autosave
//!  └─────────┬─────────┘      └──────┬───────┘
//!            │                       │
//!  ┌─────────▼─────────┐      ┌──────▼───────┐
//!  │ Field Validators  │      │    Draft     │──► DraftStore
//!  └─────────┬─────────┘      └──────────────┘
//!  ┌─────────▼─────────┐
//!  │   Error Summary   │
//!  └─────────┬─────────┘
//!  ┌─────────▼─────────┐
//!  │    Submission     │──► SubmissionTransport (HTTP POST)
//!  └───────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use signup_form::{FieldId, FormConfig, HttpTransport, MemoryStore, SignupForm};
//! use std::time::Instant;
//!
//! # async fn run() -> signup_form::Result<()> {
//! let config = FormConfig::default();
//! let transport = HttpTransport::new(&config)?;
//! let mut form = SignupForm::new(config, MemoryStore::new())?;
//! form.load();
//!
//! form.input(FieldId::Name, "Aino Virtanen", Instant::now());
//! form.input(FieldId::Email, "aino@example.fi", Instant::now());
//! form.input(FieldId::Password, "Secret123", Instant::now());
//!
//! let outcome = form.submit(&transport).await;
//! println!("{:?}", outcome.notice());
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod controller;
pub mod debounce;
pub mod draft;
pub mod error;
pub mod phone;
pub mod registry;
pub mod storage;
pub mod submission;
pub mod summary;
pub mod transport;
pub mod validation;

pub use config::FormConfig;
pub use controller::SignupForm;
pub use debounce::Debouncer;
pub use draft::Draft;
pub use error::{FormError, Result};
pub use registry::{FieldDisplay, FieldId, FieldRegistry, FormState};
pub use storage::{DraftStore, FileStore, MemoryStore};
pub use submission::SubmitOutcome;
pub use summary::SummaryView;
pub use transport::{HttpTransport, Payload, Receipt, SubmissionId, SubmissionTransport};
pub use validation::{ValidationResult, Validator};
