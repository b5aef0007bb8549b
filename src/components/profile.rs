use crate::auth::{logout, use_auth};
use crate::components::icons::LogOut;
use crate::web::route::AppRoute;
use crate::web::router::{use_navigate, use_router};
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth_ctx = use_auth();
    let router = use_router();
    let navigate = use_navigate();
    let auth_state = auth_ctx.state;

    let username = move || {
        auth_state
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_else(|| "Guest".to_string())
    };
    // 头像占位：用户名首字母
    let initial = move || {
        username()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    };

    let on_logout = move |_| {
        // 登出即吊销全部已认证路由；引导标记保持不变
        logout(&auth_ctx, &router);
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-2xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1">
                        <button
                            class="btn btn-ghost text-xl"
                            on:click=move |_| navigate(AppRoute::Feed.to_path())
                        >
                            "← Feed"
                        </button>
                    </div>
                    <div class="flex-none">
                        <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                            <LogOut attr:class="h-4 w-4" /> "Sign Out"
                        </button>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body items-center text-center">
                        <div class="avatar avatar-placeholder">
                            <div class="bg-primary text-primary-content w-24 rounded-full">
                                <span class="text-3xl">{initial}</span>
                            </div>
                        </div>
                        <h2 class="card-title text-2xl mt-2">{username}</h2>
                        <p class="text-base-content/70">"Living my best social life ✨"</p>

                        <div class="stats shadow mt-4 stats-horizontal bg-base-100">
                            <div class="stat place-items-center">
                                <div class="stat-title">"Posts"</div>
                                <div class="stat-value text-primary">"12"</div>
                            </div>
                            <div class="stat place-items-center">
                                <div class="stat-title">"Followers"</div>
                                <div class="stat-value text-primary">"256"</div>
                            </div>
                            <div class="stat place-items-center">
                                <div class="stat-title">"Following"</div>
                                <div class="stat-value text-primary">"180"</div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
