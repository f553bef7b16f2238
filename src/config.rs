pub fn get_enroll_url() -> &'static str {
    "https://www.skool.com/chaiwithjai/about"
}

pub fn get_portrait_src() -> &'static str {
    "/jai.jpg"
}
