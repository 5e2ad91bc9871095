use leptos::prelude::*;
use moonmap_shared::{MapCatalog, Route};

use crate::app::{CatalogStore, set_document_title};
use crate::config::MAP_LIST_TITLE;
use crate::router::Link;

/// `(path, locale)` for every map, in the order `maps.json` lists them.
fn map_links(catalog: &MapCatalog) -> Vec<(String, String)> {
    catalog
        .iter()
        .map(|(name, info)| (Route::Map(name.to_string()).path(), info.locale.clone()))
        .collect()
}

#[component]
pub fn MapList() -> impl IntoView {
    let CatalogStore(catalog) = expect_context();
    let links = catalog.with_value(map_links);

    Effect::new(move || {
        set_document_title(MAP_LIST_TITLE);
    });

    view! {
        <div style="max-width: 960px; margin: 0 auto; padding: 0 24px; font-family: 'Inter', system-ui, sans-serif;">
            <div style="font-weight: 700; margin: 12px 0;">"* 좌표 검증 못함"</div>
            {links
                .into_iter()
                .map(|(path, locale)| {
                    view! {
                        <div>
                            <Link to=path>
                                <div style="font-weight: 700; text-decoration: underline; color: #3b82f6; margin: 12px 0;">
                                    {locale}
                                </div>
                            </Link>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
