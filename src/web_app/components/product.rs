// web_app/components/product.rs - Product display components
//
// - ProductCard: one tile with image, tags, price and shop link
// - ProductGrid: the current page of results, or the empty state

use leptos::prelude::*;

use crate::web_app::model::{Product, TagKind};
use crate::web_app::query::CatalogView;
use super::common::{Badge, TagBadge};

/// Served from `public/` for products scraped without an image
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Image URL to render for a product
pub fn image_src(product: &Product) -> &str {
    if product.image.is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        &product.image
    }
}

/// Product card for the results grid
///
/// Out-of-stock products stay visible but their shop link is disabled.
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
) -> impl IntoView {
    let in_stock = product.in_stock;
    let image = image_src(&product).to_string();

    view! {
        <div class="bg-white rounded-2xl overflow-hidden shadow-lg hover:shadow-xl transition-all duration-300 group h-[480px]">
            <div class="relative h-72 overflow-hidden bg-stone-50">
                <img
                    src=image
                    alt=product.name.clone()
                    loading="lazy"
                    class="w-full h-full object-contain p-4 transition-transform duration-500 group-hover:scale-105"
                />

                // Type badge, top right
                {(!product.product_type.is_empty()).then(|| view! {
                    <div class="absolute top-3 right-3">
                        <TagBadge kind=TagKind::Type value=product.product_type.clone() size="text-xs font-normal" />
                    </div>
                })}

                {(!in_stock).then(|| view! {
                    <div class="absolute inset-0 bg-black/30 flex items-center justify-center z-10">
                        <Badge class="bg-red-500 text-white px-3 py-1 text-sm">"Out of Stock"</Badge>
                    </div>
                })}
            </div>

            <div class="p-4 relative h-[156px]">
                <div class="flex justify-between items-start gap-2 mb-2">
                    <h3 class="font-medium text-lg line-clamp-2">{product.name.clone()}</h3>
                    <span class="font-medium text-orange-600 whitespace-nowrap">
                        {product.formatted_price.clone()}
                    </span>
                </div>

                <div class="flex flex-wrap gap-2 mb-3">
                    <TagBadge kind=TagKind::Language value=product.language.clone() />
                    <TagBadge kind=TagKind::Seller value=product.shop.clone() />
                </div>

                <a
                    href=product.link.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class=if in_stock { "absolute bottom-4 right-4" } else { "absolute bottom-4 right-4 pointer-events-none" }
                    aria-disabled=(!in_stock).to_string()
                    tabindex=(!in_stock).then_some("-1")
                >
                    <button
                        type="button"
                        disabled=!in_stock
                        title=if in_stock { "Visit shop" } else { "Out of stock" }
                        class="rounded-full w-10 h-10 flex items-center justify-center bg-orange-500 \
                               hover:bg-orange-600 text-white shadow-md disabled:opacity-50"
                    >
                        "🛍"
                    </button>
                </a>
            </div>
        </div>
    }
}

/// Grid of the current page
///
/// Shows the empty state with a reset button when nothing matches.
#[component]
pub fn ProductGrid(
    #[prop(into)]
    catalog_view: Signal<CatalogView>,
    /// Clears every filter, the search and the sort
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="max-w-7xl mx-auto px-4 md:px-6 py-4">
            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                <For
                    each=move || catalog_view.with(|v| v.items.clone())
                    key=|product| product.id
                    children=move |product: Product| view! { <ProductCard product=product /> }
                />
            </div>

            <Show when=move || catalog_view.with(CatalogView::is_empty)>
                <div class="text-center py-16">
                    <p class="text-stone-500 mb-4">"No products match your current filters."</p>
                    <button
                        type="button"
                        class="rounded-full px-4 py-2 border border-orange-300 text-orange-600 hover:bg-orange-50"
                        on:click=move |_| on_clear.run(())
                    >
                        "Clear All Filters"
                    </button>
                </div>
            </Show>
        </section>
    }
}
