/// 将任意名称转换为适合文件名的 slug
///
/// 非字母数字字符折叠为单个连字符，结果全小写，首尾不带连字符。
/// 空输入退化为 "bundle"。
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_dash = true;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        "bundle".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(slugify("Teaching Excellence"), "teaching-excellence");
    }

    #[test]
    fn test_collapses_separators() {
        assert_eq!(slugify("  R&D / Grants  "), "r-d-grants");
    }

    #[test]
    fn test_empty_falls_back() {
        assert_eq!(slugify("???"), "bundle");
    }
}
