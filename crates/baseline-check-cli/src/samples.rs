//! Curated sample snippets for trying the analyzer.

/// A named sample snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

pub const SAMPLES: [Sample; 3] = [
    Sample {
        name: "css",
        title: "Modern CSS Grid",
        description: "CSS Grid with container queries and aspect ratio",
        code: r#".container {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 2rem;
  aspect-ratio: 16/9;
  container-type: inline-size;
}

@container (min-width: 400px) {
  .card {
    padding: 2rem;
    border-radius: 1rem;
  }
}

.card {
  background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
  backdrop-filter: blur(10px);
}
"#,
    },
    Sample {
        name: "javascript",
        title: "Modern JavaScript",
        description: "Async/await, fetch API, and ES modules",
        code: r#"// Modern JavaScript with async/await and fetch
const fetchUserData = async (userId) => {
  try {
    const response = await fetch(`/api/users/${userId}`);
    const userData = await response.json();

    // Destructuring and optional chaining
    const { name, email, preferences = {} } = userData;
    const theme = preferences?.ui?.theme ?? 'light';

    // Array methods and template literals
    const notifications = userData.notifications
      ?.filter(n => !n.read)
      ?.map(n => ({ ...n, timestamp: new Date(n.created) }));

    return { name, email, theme, notifications };
  } catch (error) {
    console.error('Failed to fetch user data:', error);
    throw new Error('User data unavailable');
  }
};

// Top-level await and dynamic imports
const userModule = await import('./user-utils.js');
const currentUser = await fetchUserData('123');
"#,
    },
    Sample {
        name: "html",
        title: "Advanced HTML",
        description: "Modern HTML with web components and forms",
        code: r#"<!-- Modern HTML with web components and advanced forms -->
<dialog id="user-modal" class="modal">
  <form method="dialog" class="modal-form">
    <h2>User Registration</h2>

    <input type="email" name="email" required
           placeholder="Enter your email"
           pattern="[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$">

    <input type="url" name="website"
           placeholder="Your website (optional)">

    <input type="tel" name="phone"
           placeholder="Phone number"
           pattern="[0-9]{3}-[0-9]{3}-[0-9]{4}">

    <input type="date" name="birthdate" required>

    <input type="range" name="experience"
           min="1" max="10" value="5">

    <datalist id="skills">
      <option value="JavaScript">
      <option value="TypeScript">
      <option value="React">
    </datalist>

    <button type="submit">Register</button>
  </form>
</dialog>

<my-custom-element data-theme="dark">
  <template shadowrootmode="open">
    <style>
      :host { display: block; }
      .content { padding: 1rem; }
    </style>
    <div class="content">
      <slot></slot>
    </div>
  </template>
  <p>This is a custom element with shadow DOM!</p>
</my-custom-element>
"#,
    },
];

/// Look up a sample by name (case-insensitive).
pub fn find_sample(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

/// Names of all samples, comma-separated.
pub fn sample_names() -> String {
    SAMPLES.iter().map(|s| s.name).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use baseline_check::{analyze, BaselineDataset};

    fn analyzed(name: &str) -> baseline_check::AnalysisResult {
        analyze(find_sample(name).unwrap().code, BaselineDataset::builtin())
    }

    #[test]
    fn test_find_sample() {
        assert_eq!(find_sample("HTML").unwrap().title, "Advanced HTML");
        assert!(find_sample("rust").is_none());
        assert_eq!(sample_names(), "css, javascript, html");
    }

    #[test]
    fn test_css_sample() {
        let result = analyzed("css");
        for id in ["grid", "aspect-ratio", "css-container-queries", "backdrop-filter"] {
            assert!(result.get(id).is_some(), "missing {id}");
        }
    }

    #[test]
    fn test_javascript_sample() {
        let result = analyzed("javascript");
        for id in [
            "fetch",
            "optional-chaining",
            "nullish-coalescing",
            "dynamic-import",
            "top-level-await",
        ] {
            assert!(result.get(id).is_some(), "missing {id}");
        }
    }

    #[test]
    fn test_html_sample() {
        let result = analyzed("html");
        for id in ["dialog", "datalist", "template", "input-email"] {
            assert!(result.get(id).is_some(), "missing {id}");
        }
    }
}
