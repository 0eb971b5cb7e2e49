//! Page view state machines.
//!
//! Each view instance runs `Loading -> Ready` on mount and whenever its
//! subject changes. Within `Ready`, a saving flag admits one mutation at a
//! time; a mutation requested while another is in flight is refused as
//! [`EditOutcome::Busy`] without touching the store. Every successful mutation
//! refetches before reporting back.
//!
//! Fetches that resolve after the view was unmounted, or after a newer fetch
//! started, are dropped: see [`LoadTracker`].

pub mod best_sellers;
pub mod category;
pub mod editing;
pub mod home;
pub mod offer;

pub use best_sellers::BestSellersView;
pub use category::{CategoryPage, CategoryView};
pub use editing::EditingViews;
pub use home::HomePage;
pub use offer::OfferView;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use herreria_core::forms::ValidationError;
use serde::Serialize;

/// Whether the current viewer may edit the catalog.
///
/// Passed explicitly into every view; views never look it up themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EditorContext {
    pub is_authenticated: bool,
}

impl EditorContext {
    /// A viewer with editing rights.
    #[must_use]
    pub const fn editor() -> Self {
        Self {
            is_authenticated: true,
        }
    }

    /// An anonymous visitor.
    #[must_use]
    pub const fn visitor() -> Self {
        Self {
            is_authenticated: false,
        }
    }
}

/// Data of a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum LoadState<T> {
    Loading,
    Ready(T),
}

impl<T> LoadState<T> {
    /// The loaded data, if ready.
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Ready(data) => Some(data),
        }
    }
}

/// Result of an add, edit or delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The mutation succeeded and the view was refetched.
    Done(&'static str),
    /// The form did not validate; nothing was sent.
    Invalid(ValidationError),
    /// The store rejected the mutation.
    Failed(&'static str),
    /// Another mutation of this view is still in flight; nothing was sent.
    Busy,
    /// The viewer may not edit; nothing was sent.
    Unauthorized,
}

impl EditOutcome {
    /// Returns `true` for [`EditOutcome::Done`].
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Message to show the editor.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Done(message) | Self::Failed(message) => *message,
            Self::Invalid(err) => err.user_message(),
            Self::Busy => "Hay una operación en curso, espera a que termine",
            Self::Unauthorized => "Inicia sesión para editar el catálogo",
        }
    }
}

/// Tracks which fetch of a view is current.
///
/// Each fetch takes a generation number when it starts; its result may only
/// be applied while the view is mounted and no newer fetch has started.
#[derive(Debug)]
pub struct LoadTracker {
    generation: AtomicU64,
    mounted: AtomicBool,
}

impl Default for LoadTracker {
    fn default() -> Self {
        Self {
            generation: AtomicU64::new(0),
            mounted: AtomicBool::new(true),
        }
    }
}

impl LoadTracker {
    /// Start a fetch and return its generation.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether the result of fetch `generation` may be applied.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.mounted.load(Ordering::SeqCst) && self.generation.load(Ordering::SeqCst) == generation
    }

    /// Mark the view as gone; pending fetches will be dropped.
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }
}

/// The saving flag of a view.
#[derive(Debug, Default)]
pub struct SavingFlag(AtomicBool);

impl SavingFlag {
    /// Enter the saving state, or `None` if a mutation is already running.
    ///
    /// The state is left when the returned guard drops.
    pub fn try_begin(&self) -> Option<SavingGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| SavingGuard(&self.0))
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Holds a view in the saving state.
#[derive(Debug)]
pub struct SavingGuard<'a>(&'a AtomicBool);

impl Drop for SavingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Gate every mutation of a view: authorization first, then the saving flag.
fn admit<'a>(
    editor: EditorContext,
    saving: &'a SavingFlag,
) -> Result<SavingGuard<'a>, EditOutcome> {
    if !editor.is_authenticated {
        return Err(EditOutcome::Unauthorized);
    }
    saving.try_begin().ok_or(EditOutcome::Busy)
}
