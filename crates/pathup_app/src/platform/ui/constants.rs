pub const TITLE: &str = "PathUp: Resume Analyzer";
pub const TAGLINE: &str =
    "Upload your resume and paste a job description to find your skill gaps.";
pub const RESUME_LABEL: &str = "Upload Resume (PDF, PNG, JPG)";
pub const JD_PLACEHOLDER: &str = "Paste the job description here...";
pub const LOADING_TEXT: &str = "Analyzing your profile... this may take a moment.";
pub const BUSY_TEXT: &str = "An analysis is already running.";
