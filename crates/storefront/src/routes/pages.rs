//! Server-rendered pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use herreria_core::contact::LocationInfo;
use herreria_core::{BestSeller, Category, CategoryInfo, FeaturedOffer};
use tracing::instrument;

use crate::middleware::Editor;
use crate::state::AppState;
use crate::views::{CategoryPage, CategoryView, HomePage};

/// Navigation entries, one per category.
fn nav() -> Vec<CategoryInfo> {
    Category::ALL.into_iter().map(CategoryInfo::from).collect()
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub nav: Vec<CategoryInfo>,
    pub offer: Option<FeaturedOffer>,
    pub best_sellers: Vec<BestSeller>,
    pub is_editor: bool,
    pub location: LocationInfo,
}

/// Location page template.
#[derive(Template, WebTemplate)]
#[template(path = "location.html")]
pub struct LocationTemplate {
    pub nav: Vec<CategoryInfo>,
    pub location: LocationInfo,
}

/// Category page template.
#[derive(Template, WebTemplate)]
#[template(path = "category.html")]
pub struct CategoryTemplate {
    pub nav: Vec<CategoryInfo>,
    pub page: CategoryPage,
}

/// Display the home page.
#[instrument(skip(state, editor))]
pub async fn home(State(state): State<AppState>, editor: Editor) -> HomeTemplate {
    let page = HomePage::load(state.catalog(), editor.0).await;

    HomeTemplate {
        offer: page.displayed_offer().cloned(),
        best_sellers: page.best_sellers().to_vec(),
        is_editor: page.editor.is_authenticated,
        nav: page.categories,
        location: LocationInfo::shop(),
    }
}

/// Display the location page.
#[instrument]
pub async fn location() -> LocationTemplate {
    LocationTemplate {
        nav: nav(),
        location: LocationInfo::shop(),
    }
}

/// Display a category page.
///
/// Unknown categories render the fallback heading with no products.
#[instrument(skip(state, editor))]
pub async fn category(
    State(state): State<AppState>,
    editor: Editor,
    Path(category): Path<String>,
) -> CategoryTemplate {
    let view = CategoryView::mount(state.catalog().clone(), editor.0, &category).await;

    CategoryTemplate {
        nav: nav(),
        page: view.page().await,
    }
}
