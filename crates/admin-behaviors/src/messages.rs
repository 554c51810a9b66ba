//! User-facing text. The admin site is Russian-only.

pub const LOADING: &str = "Загрузка…";

pub fn wrong_file_name(required: &str) -> String {
    format!("Имя файла должно быть {}", required)
}

pub fn confirm_status_change(status: &str) -> String {
    format!("Вы уверены, что хотите изменить статус на \"{}\"?", status)
}

pub fn items_load_failed(detail: &str) -> String {
    format!("Не удалось загрузить позиции: {}", detail)
}

pub fn status_submit_failed(detail: &str) -> String {
    format!("Не удалось отправить изменение статуса: {}", detail)
}
