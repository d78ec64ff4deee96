//! Report builder: summary, critical issues, and recommendations.

use super::models::{
    Analysis, AuditReport, CriticalIssue, DetailedResults, Priority, Recommendation,
    ReportSummary, Severity, POWERED_BY,
};
use super::scoring::grade_for;

/// Critical issues are capped at the top three.
pub const MAX_CRITICAL_ISSUES: usize = 3;

/// LCP threshold for "good" per Core Web Vitals
const LCP_THRESHOLD_MS: f64 = 2500.0;

const PAGESPEED_SOURCE: &str = "Google PageSpeed Insights";
const STUDIO_SOURCE: &str = "SiteLaunch Studios SEO Analysis";

pub fn build_report(analysis: Analysis) -> AuditReport {
    let critical_issues = identify_critical_issues(&analysis);
    let recommendations = generate_recommendations(&analysis);

    AuditReport {
        summary: ReportSummary {
            url: analysis.url,
            overall_score: analysis.score,
            grade: grade_for(analysis.score),
            timestamp: analysis.timestamp,
            powered_by: POWERED_BY.to_string(),
        },
        critical_issues,
        recommendations,
        detailed: DetailedResults {
            mobile: analysis.mobile,
            desktop: analysis.desktop,
            technical: analysis.technical,
            seo: analysis.seo,
        },
        warning: analysis.warning,
    }
}

/// Checked in fixed precedence: performance, web vitals, usability, SEO.
/// A zero score means "not measured" and never triggers an issue.
pub fn identify_critical_issues(analysis: &Analysis) -> Vec<CriticalIssue> {
    let mobile = &analysis.mobile;
    let mut critical = Vec::new();

    if (1..70).contains(&mobile.performance_score) {
        critical.push(critical_issue(
            "Mobile Performance",
            Severity::High,
            format!(
                "Mobile speed score of {}/100 (Google PageSpeed Insights)",
                mobile.performance_score
            ),
            "Users likely abandoning site due to slow mobile loading - 68% of Miami traffic is mobile",
        ));
    }

    if let Some(lcp) = mobile
        .largest_contentful_paint
        .filter(|lcp| *lcp > LCP_THRESHOLD_MS)
    {
        critical.push(critical_issue(
            "Core Web Vitals",
            Severity::High,
            format!(
                "Largest Contentful Paint is {:.1}s (should be < 2.5s)",
                lcp / 1000.0
            ),
            "Google uses this metric for search rankings",
        ));
    }

    if !mobile.mobile_usability.issues.is_empty() {
        critical.push(critical_issue(
            "Mobile Usability",
            Severity::High,
            mobile.mobile_usability.issues.join(", "),
            "Google penalizes sites with poor mobile experience",
        ));
    }

    if (1..80).contains(&analysis.seo.seo_score) {
        critical.push(critical_issue(
            "SEO Optimization",
            Severity::Medium,
            format!("SEO score of {}/100 needs improvement", analysis.seo.seo_score),
            "Lower search rankings mean fewer customers finding your business",
        ));
    }

    critical.truncate(MAX_CRITICAL_ISSUES);
    critical
}

/// Every triggered recommendation, in fixed order.
pub fn generate_recommendations(analysis: &Analysis) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if (1..80).contains(&analysis.mobile.performance_score) {
        recommendations.push(recommendation(
            Priority::High,
            "Performance",
            "Optimize images and enable compression to improve mobile performance",
            "20-30% improvement in mobile load time",
            "1-2 weeks",
            PAGESPEED_SOURCE,
        ));
    }

    if analysis.mobile.mobile_usability.score < 90 {
        recommendations.push(recommendation(
            Priority::High,
            "Mobile Experience",
            "Fix mobile usability issues identified by Google",
            "Better mobile experience for 68% of Miami visitors",
            "1-2 weeks",
            PAGESPEED_SOURCE,
        ));
    }

    if !analysis.seo.has_local_keywords {
        recommendations.push(recommendation(
            Priority::Medium,
            "Local SEO",
            "Add Miami/South Florida keywords to improve local search rankings",
            "Better visibility in local search results",
            "1 week",
            STUDIO_SOURCE,
        ));
    }

    if !analysis.technical.issues.is_empty() {
        recommendations.push(recommendation(
            Priority::Medium,
            "Technical",
            "Fix technical issues identified by Google Lighthouse",
            "Improved search engine rankings and user experience",
            "1-3 weeks",
            PAGESPEED_SOURCE,
        ));
    }

    recommendations
}

fn critical_issue(issue_type: &str, severity: Severity, issue: String, impact: &str) -> CriticalIssue {
    CriticalIssue {
        issue_type: issue_type.to_string(),
        severity,
        issue,
        impact: impact.to_string(),
        google_metric: true,
    }
}

fn recommendation(
    priority: Priority,
    category: &str,
    action: &str,
    expected_impact: &str,
    timeline: &str,
    source: &str,
) -> Recommendation {
    Recommendation {
        priority,
        category: category.to_string(),
        action: action.to_string(),
        expected_impact: expected_impact.to_string(),
        timeline: timeline.to_string(),
        source: source.to_string(),
    }
}
