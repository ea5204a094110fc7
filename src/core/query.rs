/// 去頭尾空白並轉小寫；結果為空時回傳 None，代表不需要送出查詢
pub fn normalize_query(raw: &str) -> Option<String> {
    let query = raw.trim().to_lowercase();
    if query.is_empty() {
        None
    } else {
        Some(query)
    }
}
