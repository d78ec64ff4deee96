// PageSpeed response bodies used across integration tests

use serde_json::{json, Value};

/// A healthy Lighthouse body with the given category scores (0.0-1.0)
pub fn lighthouse_body(final_url: &str, performance: f64, seo: f64) -> Value {
    json!({
        "lighthouseResult": {
            "finalUrl": final_url,
            "categories": {
                "performance": { "score": performance },
                "accessibility": { "score": 0.9 },
                "best-practices": { "score": 0.95 },
                "seo": { "score": seo }
            },
            "audits": {
                "first-contentful-paint": { "score": 0.9, "numericValue": 1100.0 },
                "largest-contentful-paint": { "score": 0.9, "numericValue": 2100.0 },
                "max-potential-fid": { "score": 1, "numericValue": 60.0 },
                "cumulative-layout-shift": { "score": 1, "numericValue": 0.02 },
                "speed-index": { "score": 0.9, "numericValue": 1900.0 },
                "total-blocking-time": { "score": 1, "numericValue": 40.0 },
                "is-on-https": { "score": 1 },
                "viewport": { "score": 1 },
                "tap-targets": { "score": 1 },
                "font-size": { "score": 1 },
                "content-width": { "score": 1 }
            }
        },
        "loadingExperience": { "id": final_url },
        "originLoadingExperience": { "id": final_url }
    })
}

/// A slow site with usability problems and a local-market URL
pub fn struggling_body() -> Value {
    json!({
        "lighthouseResult": {
            "finalUrl": "https://miami-bakery.com/",
            "categories": {
                "performance": { "score": 0.45 },
                "accessibility": { "score": 0.7 },
                "best-practices": { "score": 0.6 },
                "seo": { "score": 0.72 }
            },
            "audits": {
                "largest-contentful-paint": { "score": 0.1, "numericValue": 4260.0 },
                "is-on-https": { "score": 1 },
                "viewport": { "score": 0 },
                "tap-targets": { "score": 0.5 },
                "uses-text-compression": { "score": 0 }
            }
        }
    })
}

pub fn desktop_body(performance: f64) -> Value {
    json!({
        "lighthouseResult": {
            "finalUrl": "https://example.com/",
            "categories": {
                "performance": { "score": performance }
            },
            "audits": {
                "first-contentful-paint": { "numericValue": 500.0 },
                "largest-contentful-paint": { "numericValue": 900.0 },
                "cumulative-layout-shift": { "numericValue": 0.0 }
            }
        }
    })
}
