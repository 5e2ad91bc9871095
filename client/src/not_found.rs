use leptos::prelude::*;

use crate::config::NOT_FOUND_IMAGE;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div style="position: absolute; top: 0; width: 100vw; height: 100vh; background: #f1f5f9; font-family: 'Inter', system-ui, sans-serif;">
            <div style="margin: 56px 0 40px; text-align: center;">
                <img src=NOT_FOUND_IMAGE width="256" height="256" alt="" style="margin: auto; display: block;" />
                <h1 style="font-size: 4.5rem; font-weight: 200; margin: 16px auto 48px;">"404"</h1>
                <p>"찾을 수 없는 페이지입니다."</p>
                <p>"요청하신 페이지가 사라졌거나, 잘못된 경로를 이용하셨어요."</p>
            </div>
        </div>
    }
}
