use crate::auth::{finish_onboarding, use_auth};
use crate::components::slide_item::{Slide, SlideItem};
use crate::onboarding::{CarouselState, SLIDE_COUNT, Tick};
use crate::web::Interval;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 引导幻灯片内容
const SLIDES: [Slide; SLIDE_COUNT] = [
    Slide {
        emoji: "👥",
        title: "Connect & Share",
        description: "Join a community of like-minded people and share your moments",
    },
    Slide {
        emoji: "💫",
        title: "Express Yourself",
        description: "Create, post, and interact with others in unique ways",
    },
    Slide {
        emoji: "🌟",
        title: "Start Your Journey",
        description: "Your social adventure begins here",
    },
];

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let router = use_router();

    let carousel = RwSignal::new(CarouselState::default());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 定时器资源：进入页面时获取，所有退出路径上释放
    let timer = StoredValue::new_local(Option::<Interval>::None);

    // 完成动作：持久化标记成功后才会离开本页；
    // 失败时只呈现错误，导航保持不动
    let run_finish = move || {
        if let Err(e) = finish_onboarding(&auth_ctx, &router) {
            web_sys::console::error_1(&format!("[Onboarding] {}", e).into());
            set_error_msg.set(Some(e.message));
        }
    };

    timer.set_value(Some(Interval::new(1000, move || {
        // 页面卸载后信号已销毁，try_update 返回 None，不再触碰状态
        let Some(outcome) = carousel.try_update(|state| state.tick()) else {
            return;
        };

        if outcome == Tick::Finished {
            // 幂等取消：不释放闭包，在自身回调内调用是安全的
            timer.with_value(|t| {
                if let Some(t) = t {
                    t.cancel();
                }
            });
            // 完成动作推迟到微任务，避免在定时器回调内同步卸载自身
            spawn_local(async move { run_finish() });
        }
    })));

    on_cleanup(move || {
        timer.update_value(|t| {
            t.take();
        });
    });

    let retry_finish = move |_| {
        set_error_msg.set(None);
        run_finish();
    };

    let current_index = move || carousel.with(|state| state.current_index());

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="card w-full bg-base-100 shadow-2xl">
                    <div class="card-body items-center text-center">
                        {move || {
                            let slide = SLIDES[current_index()];
                            view! { <SlideItem slide=slide /> }
                        }}

                        <Show when=move || error_msg.get().is_none()>
                            <p class="text-base-content/70 font-medium">
                                "Please wait "
                                {move || carousel.with(|state| state.seconds_remaining())}
                                " seconds..."
                            </p>
                        </Show>

                        <div class="flex items-center gap-2 h-4 mt-2">
                            {(0..SLIDE_COUNT)
                                .map(|i| {
                                    view! {
                                        <span class=move || {
                                            if current_index() == i {
                                                "w-5 h-2.5 rounded-full bg-primary transition-all"
                                            } else {
                                                "w-2.5 h-2.5 rounded-full bg-primary/30 transition-all"
                                            }
                                        }></span>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2 mt-4">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                            <button class="btn btn-outline btn-sm mt-2" on:click=retry_finish>
                                "Try again"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
