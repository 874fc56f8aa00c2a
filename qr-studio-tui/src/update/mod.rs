//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! 接收 Message，修改 Model，并在需要时返回一个交给 Backend 执行的 Job。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;           // 输入框与提示词建议
//!         mod modal;          // 弹窗
//!
//!
//!     在 src/update/mod.rs 中，有：
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<Job> {
//!             match msg {
//!                 AppMessage::Submit => {
//!                     app.controller.start_submit(...)    // 校验 + 并发保护 + 进入 Loading
//!                     return Some(Job::Generate(job))     // 网络请求交给 Backend
//!                 }
//!                 AppMessage::Backend(event) => {
//!                     app.controller.finish_submit(...)   // Success / Failed
//!                 }
//!                 ...
//!             }
//!         }
//!
//!     Update 层本身从不等待网络，因此可以直接在测试中驱动：
//!         返回的 Job 在测试里用 `tokio_test::block_on(job.run())` 执行，
//!         再把结果作为 AppMessage::Backend 送回 update()。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod form;
mod modal;

#[cfg(test)]
pub mod test_support;

use std::time::Instant;

use qr_studio_core::{preview, Field, SubmitRejection, ThemeName};

use crate::backend::{BackendEvent, Job};
use crate::i18n::{self, t};
use crate::message::AppMessage;
use crate::model::state::PreviewState;
use crate::model::{App, FormFocus};
use crate::view::theme;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Job> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::FocusNext => {
            if !app.modal.is_open() {
                app.focus = app.focus.next();
            }
        }

        AppMessage::FocusPrev => {
            if !app.modal.is_open() {
                app.focus = app.focus.prev();
            }
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Submit => return submit(app),

        AppMessage::Download => return download(app),

        AppMessage::Share => return share(app),

        AppMessage::ToggleLanguage => {
            app.language = app.language.next();
            i18n::set_language(app.language);
            app.set_status(format!(
                "{}: {}",
                t().status.language_changed,
                app.language.display_name()
            ));
            app.config.language = app.language;
            return save_config(app);
        }

        AppMessage::ToggleTheme => {
            app.theme = app.theme.toggle();
            theme::set_theme(app.theme);
            refresh_preview(app);
            app.config.theme = app.theme;
            return save_config(app);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Escape => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
            } else {
                app.controller.clear_errors();
                app.clear_status();
            }
        }

        AppMessage::Backend(event) => apply_backend_event(app, event),

        AppMessage::Tick => {
            app.tick = app.tick.wrapping_add(1);
            app.controller.prune_notifications(Instant::now());
            // 后台任务丢失（例如 panic）时结束 Loading
            if app.controller.recover_lost_request() {
                app.preview = None;
            }
        }

        AppMessage::Noop => {}
    }

    None
}

/// 提交表单
fn submit(app: &mut App) -> Option<Job> {
    let input = app.controller.form().input();

    match app.controller.start_submit(input) {
        Ok(job) => {
            app.clear_status();
            app.preview = None;
            Some(Job::Generate(job))
        }
        Err(SubmitRejection::Invalid(errors)) => {
            // 焦点跳到第一个出错的字段
            app.focus = if errors.get(Field::Url).is_some() {
                FormFocus::Url
            } else {
                FormFocus::Prompt
            };
            app.set_status(t().status.fix_errors);
            None
        }
        Err(SubmitRejection::Busy) => {
            app.set_status(t().status.busy);
            None
        }
    }
}

/// 下载当前结果
fn download(app: &mut App) -> Option<Job> {
    let Some(result) = app.controller.result().cloned() else {
        app.set_status(t().status.nothing_to_download);
        return None;
    };

    app.set_status(t().status.downloading);
    Some(Job::SideEffect(
        app.controller
            .download_job(&result, &result.default_filename()),
    ))
}

/// 复制当前结果的分享链接
fn share(app: &mut App) -> Option<Job> {
    let Some(result) = app.controller.result().cloned() else {
        app.set_status(t().status.nothing_to_share);
        return None;
    };

    app.set_status(t().status.sharing);
    Some(Job::SideEffect(app.controller.share_job(&result)))
}

/// 应用后台任务结果
fn apply_backend_event(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::Generated(outcome) => {
            if app.controller.finish_submit(outcome) {
                refresh_preview(app);
            }
        }
        BackendEvent::SideEffect(outcome) => {
            app.clear_status();
            app.controller.record_side_effect(outcome);
        }
        BackendEvent::ConfigSaved(Ok(())) => {}
        BackendEvent::ConfigSaved(Err(e)) => {
            log::warn!("Could not save config: {e}");
            app.set_status(t().status.config_save_failed);
        }
    }
}

/// 把语言与主题写回配置文件
fn save_config(app: &App) -> Option<Job> {
    let path = app.config_path.clone()?;
    Some(Job::SaveConfig {
        config: Box::new(app.config.clone()),
        path,
    })
}

/// 为当前结果渲染终端预览（结果或主题未变时复用缓存）
fn refresh_preview(app: &mut App) {
    // 深色背景上需要反色，扫码器才能识别
    let inverted = app.theme == ThemeName::Dark;

    let Some(result) = app.controller.result() else {
        app.preview = None;
        return;
    };
    if app
        .preview
        .as_ref()
        .is_some_and(|p| p.is_for(&result.id, inverted))
    {
        return;
    }

    let content = preview::render_terminal(&result.target, inverted).map_err(|e| e.to_string());
    if let Err(ref e) = content {
        log::warn!("Preview unavailable for {}: {e}", result.id);
    }

    app.preview = Some(PreviewState {
        result_id: result.id.clone(),
        inverted,
        content,
    });
}
