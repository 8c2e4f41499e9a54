//! Decorative floating particles behind the feed.

#[cfg(test)]
#[path = "particle_background_test.rs"]
mod particle_background_test;

use leptos::prelude::*;

const PARTICLE_COUNT: u32 = 24;

/// Inline style for particle `i`. Positions are a fixed scatter so the layout
/// is identical across renders.
fn particle_style(i: u32) -> String {
    let seed = i.wrapping_add(1).wrapping_mul(2_654_435_761);
    let left = seed % 100;
    let top = (seed >> 8) % 100;
    let delay = (seed >> 16) % 10;
    let size = 2 + (seed >> 24) % 4;
    format!("left: {left}%; top: {top}%; width: {size}px; height: {size}px; animation-delay: {delay}s")
}

#[component]
pub fn ParticleBackground() -> impl IntoView {
    view! {
        <div class="particles" aria-hidden="true">
            {(0..PARTICLE_COUNT)
                .map(|i| view! { <span class="particles__dot" style=particle_style(i)></span> })
                .collect::<Vec<_>>()}
        </div>
    }
}
