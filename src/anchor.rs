/// Return the anchor used to jump to a specific license section on the
/// rendered licenses page.
///
/// The anchor is the percent-escaped file path, so it drops straight into a
/// `.../licenses#<anchor>` link. Deep links built with this rule already
/// exist in the wild: the escaping must stay stable.
pub fn license_anchor(file_path: &str) -> String {
    urlencoding::encode(file_path).into_owned()
}
