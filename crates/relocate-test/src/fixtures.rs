//! Sample pages built around a `make-everything-ok-button` link.
//!
//! Each target page pairs with [`ORIGINAL_PAGE`] and documents the XPath relocate is expected
//! to report for it.

/// Wraps `body` into a complete HTML document.
pub fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Fixture</title></head>\n<body>\n{}\n</body>\n</html>\n",
        body
    )
}

pub const OK_BUTTON_ID: &str = "make-everything-ok-button";

pub const ORIGINAL_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head><title>Make everything OK</title></head>
<body>
  <div id="wrapper">
    <div class="panel">
      <a class="btn btn-default" href="#cancel">Cancel</a>
      <a id="make-everything-ok-button" class="btn btn-success" href="#ok" title="Make-Button" rel="next" onclick="javascript:window.okDone(); return false;">Make everything OK</a>
    </div>
  </div>
</body>
</html>
"##;

/// The button kept its ID but moved into a footer.
pub const MOVED_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head><title>Make everything OK</title></head>
<body>
  <div id="wrapper">
    <div class="panel">
      <a class="btn btn-success" href="#ok" title="Make-Button" rel="next">Make everything OK</a>
    </div>
    <div class="footer">
      <a id="make-everything-ok-button" class="btn btn-danger" href="#nope">Do it</a>
    </div>
  </div>
</body>
</html>
"##;
pub const MOVED_XPATH: &str = "/html[1]/body[1]/div[1]/div[2]/a[1]";

/// The ID changed. Two links qualify; the second one matches almost everything.
pub const RENAMED_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head><title>Make everything OK</title></head>
<body>
  <div id="wrapper">
    <div class="panel">
      <a class="btn btn-success" href="#cancel">Cancel</a>
      <a id="make-everything-ok-button-2" class="btn btn-success" href="#ok" title="Make-Button" rel="next" onclick="javascript:window.okDone(); return false;">Make everything OK</a>
    </div>
  </div>
</body>
</html>
"##;
pub const RENAMED_XPATH: &str = "/html[1]/body[1]/div[1]/div[1]/a[2]";
pub const RENAMED_SCORES: [usize; 2] = [1, 6];

/// The ID is gone and only the link text survived.
pub const TEXT_ONLY_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head><title>Make everything OK</title></head>
<body>
  <div id="wrapper">
    <div class="panel">
      <a class="btn btn-default" href="#cancel">Cancel</a>
      <div class="actions"><a class="btn" data-action="ok">Make everything OK</a></div>
    </div>
  </div>
</body>
</html>
"##;
pub const TEXT_ONLY_XPATH: &str = "/html[1]/body[1]/div[1]/div[1]/div[1]/a[1]";

/// Nothing resembling the button is left among the links.
pub const UNRELATED_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head><title>Something else</title></head>
<body>
  <div id="wrapper">
    <a class="link" href="/home">Home</a>
    <button class="btn btn-success">Make everything OK</button>
  </div>
</body>
</html>
"##;
