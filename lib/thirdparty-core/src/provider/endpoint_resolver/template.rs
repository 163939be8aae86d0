use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::EndpointResolverError;
use crate::model::PathParams;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("placeholder pattern is valid")
});

/// Substitutes `{{Name}}` placeholders with the matching path parameter.
///
/// A placeholder without a parameter is an error, never passed through.
pub fn render_template(template: &str, params: &PathParams) -> Result<String, EndpointResolverError> {
    let mut rendered = String::with_capacity(template.len());
    let mut last = 0;

    for captures in PLACEHOLDER.captures_iter(template) {
        let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
            continue;
        };

        let value = params.get(name.as_str()).ok_or_else(|| {
            EndpointResolverError::UnresolvedTemplateParam(name.as_str().to_owned())
        })?;

        rendered.push_str(&template[last..whole.start()]);
        rendered.push_str(value);
        last = whole.end();
    }
    rendered.push_str(&template[last..]);

    Ok(rendered)
}

/// Appends the path template to a registered base URL, renders it and checks
/// the result is a valid URL.
pub fn render_url(
    base_url: &str,
    path_template: &str,
    params: &PathParams,
) -> Result<String, EndpointResolverError> {
    let url = render_template(
        &format!("{}{path_template}", base_url.trim_end_matches('/')),
        params,
    )?;

    Url::parse(&url).map_err(|source| EndpointResolverError::InvalidUrl {
        url: url.to_owned(),
        source,
    })?;

    Ok(url)
}
