use leptos::prelude::*;
use samwise_common::gallery::{AUTO_ADVANCE, GalleryState, caption};
use samwise_common::setup::StepImage;

/// Screenshot carousel for one setup step. Mounted fresh per step, so the
/// index starts at the first image whenever the step changes.
#[component]
pub fn Gallery(images: &'static [StepImage], step_number: usize) -> impl IntoView {
    let gallery = RwSignal::new(GalleryState::new(images.len()));

    // One countdown per index change; manual moves void the pending one.
    let epoch = Memo::new(move |_| gallery.with(|g| g.epoch));
    Effect::new(move |_| {
        let armed = epoch.get();
        if images.len() > 1 {
            set_timeout(
                move || {
                    gallery.try_update(|g| g.expire(armed));
                },
                AUTO_ADVANCE,
            );
        }
    });

    let current = move || images.get(gallery.with(|g| g.index));
    let caption_text = move || {
        current()
            .map(|image| caption(step_number, gallery.with(|g| g.index), image))
            .unwrap_or_default()
    };
    let src = move || current().map(|image| image.src).unwrap_or_default();
    let alt = move || current().map(|image| image.alt).unwrap_or_default();

    view! {
        <Show when=move || !images.is_empty()>
            <figure
                class="gallery"
                on:mouseenter=move |_| gallery.update(|g| g.hovered = true)
                on:mouseleave=move |_| gallery.update(|g| g.hovered = false)
            >
                <div class="gallery-frame">
                    <img src=src alt=alt on:click=move |_| gallery.update(|g| g.zoomed = true) />
                    <Show when=move || { images.len() > 1 }>
                        <button class="gallery-nav prev" aria-label="Previous image" on:click=move |_| gallery.update(|g| g.previous())>
                            "‹"
                        </button>
                        <button class="gallery-nav next" aria-label="Next image" on:click=move |_| gallery.update(|g| g.next())>
                            "›"
                        </button>
                    </Show>
                </div>
                <figcaption>{caption_text}</figcaption>
                <div class="gallery-dots">
                    {(0..images.len())
                        .map(|i| {
                            view! {
                                <button
                                    class="gallery-dot"
                                    class:active=move || gallery.with(|g| g.index == i)
                                    aria-label=format!("Show image {}", i + 1)
                                    on:click=move |_| gallery.update(|g| g.select(i))
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </figure>
            <Show when=move || gallery.with(|g| g.zoomed)>
                <div class="gallery-zoom" on:click=move |_| gallery.update(|g| g.zoomed = false)>
                    <img src=src alt=alt />
                    <p>{caption_text}</p>
                </div>
            </Show>
        </Show>
    }
}
