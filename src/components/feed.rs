use crate::components::icons::{Heart, MessageCircle, Share2, User};
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;
use leptos::prelude::*;

#[component]
pub fn FeedPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-2xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1">
                        <a class="btn btn-ghost text-xl">"Social Connect"</a>
                    </div>
                    <div class="flex-none">
                        <button
                            class="btn btn-ghost btn-circle"
                            on:click=move |_| navigate(AppRoute::Profile.to_path())
                        >
                            <User attr:class="h-5 w-5" />
                        </button>
                    </div>
                </div>

                <div class="text-center space-y-2 py-4">
                    <h1 class="text-3xl font-bold">"Welcome to Social Connect"</h1>
                    <p class="text-base-content/70 italic">"Where Connections Come Alive"</p>
                    <p class="text-base-content/80 max-w-md mx-auto">
                        "Connect with friends, share moments, and discover amazing stories from around the world."
                    </p>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <div class="flex items-center justify-between">
                            <div class="flex items-center gap-3">
                                <div class="avatar avatar-placeholder">
                                    <div class="bg-neutral text-neutral-content w-10 rounded-full">
                                        <span>"A"</span>
                                    </div>
                                </div>
                                <span class="font-semibold">"Atefeh"</span>
                            </div>
                            <span class="text-sm opacity-60">"2m ago"</span>
                        </div>

                        <p class="py-2">
                            "Just joined Social Connect! Excited to connect with everyone here! 🎉"
                        </p>

                        <div class="flex justify-around border-t border-base-200 pt-3">
                            <button class="btn btn-ghost btn-sm gap-2">
                                <Heart attr:class="h-5 w-5" /> "Like"
                            </button>
                            <button class="btn btn-ghost btn-sm gap-2">
                                <MessageCircle attr:class="h-5 w-5" /> "Comment"
                            </button>
                            <button class="btn btn-ghost btn-sm gap-2">
                                <Share2 attr:class="h-5 w-5" /> "Share"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
