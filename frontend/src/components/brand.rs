use leptos::*;

/// Logo, product name and tagline shown above every reset screen.
#[component]
pub fn BrandHeader(
    #[prop(default = None)] brand_name: Option<String>,
    #[prop(default = None)] tagline: Option<String>,
    #[prop(default = None)] logo_url: Option<String>,
) -> impl IntoView {
    let alt = brand_name.clone().unwrap_or_default();
    view! {
        <div class="flex flex-col items-center space-y-2">
            {logo_url.map(|src| view! { <img src=src alt=alt class="h-12 w-12" /> })}
            {brand_name
                .map(|name| {
                    view! { <h1 class="text-2xl font-bold text-fg">{name}</h1> }
                })}
            {tagline
                .map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
        </div>
    }
}
