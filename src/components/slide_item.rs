use leptos::prelude::*;

/// 单张引导幻灯片的内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[component]
pub fn SlideItem(slide: Slide) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center text-center p-5">
            <span class="text-7xl mb-5">{slide.emoji}</span>
            <h2 class="text-3xl font-semibold text-primary mb-2">{slide.title}</h2>
            <p class="text-lg text-base-content/70 px-5 leading-relaxed">{slide.description}</p>
        </div>
    }
}
