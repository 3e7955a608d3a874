use crate::catalog::RuleSpec::{self, Matches, MatchesUnlessLineContains};

pub(super) const SIGNATURES: &[(&str, &[RuleSpec])] = &[
    // Network
    (
        "fetch",
        &[
            Matches(r"fetch\s*\("),
            Matches(r"new\s+Request"),
            Matches(r"new\s+Response"),
        ],
    ),
    (
        "websockets",
        &[Matches(r"new\s+WebSocket"), Matches(r"WebSocket\s*\(")],
    ),
    (
        "eventsource",
        &[Matches(r"new\s+EventSource"), Matches(r"EventSource\s*\(")],
    ),
    ("server-sent-events", &[Matches(r"new\s+EventSource")]),
    (
        "xhr",
        &[
            Matches(r"new\s+XMLHttpRequest"),
            Matches(r"XMLHttpRequest\s*\("),
        ],
    ),
    // Syntax
    (
        "es-modules",
        &[
            Matches(r"import\s+"),
            Matches(r"export\s+"),
            Matches(r#"from\s+['"]"#),
        ],
    ),
    ("dynamic-import", &[Matches(r"import\s*\(")]),
    ("import-meta", &[Matches(r"import\.meta")]),
    (
        "top-level-await",
        &[MatchesUnlessLineContains {
            pattern: r"await\s+",
            rejected: "function",
        }],
    ),
    (
        "async-await",
        &[
            Matches(r"async\s+function"),
            Matches(r"async\s*\("),
            Matches(r"await\s+"),
        ],
    ),
    ("arrow-functions", &[Matches(r"=>\s*\{"), Matches(r"=>\s*[^{]")]),
    (
        "template-literals",
        &[Matches(r"`[^`]*\$\{[^}]*\}[^`]*`"), Matches(r"`[^`]*`")],
    ),
    (
        "destructuring",
        &[
            Matches(r"\{\s*(?:(?-u:[\w,])|\s)+\}\s*="),
            Matches(r"\[\s*(?:(?-u:[\w,])|\s)+\]\s*="),
        ],
    ),
    ("spread-operator", &[Matches(r"\.\.\.")]),
    ("rest-parameters", &[Matches(r"\.\.\.(?-u:\w)+\s*[,)]")]),
    ("default-parameters", &[Matches(r"(?-u:\w)+\s*=\s*[^,)]+\s*[,)]")]),
    ("const-let", &[Matches(r"(?-u:\b)const\s+"), Matches(r"(?-u:\b)let\s+")]),
    ("classes", &[Matches(r"(?-u:\b)class\s+(?-u:\w)+"), Matches(r"extends\s+(?-u:\w)+")]),
    ("for-of", &[Matches(r"for\s*\(\s*(?:(?-u:\w)|\s)+\s+of\s+")]),
    // Objects and collections
    (
        "map-set",
        &[
            Matches(r"new\s+Map"),
            Matches(r"new\s+Set"),
            Matches(r"Map\s*\("),
            Matches(r"Set\s*\("),
        ],
    ),
    (
        "weak-map-set",
        &[Matches(r"new\s+WeakMap"), Matches(r"new\s+WeakSet")],
    ),
    ("symbols", &[Matches(r"Symbol\s*\("), Matches(r"Symbol\.")]),
    ("proxy", &[Matches(r"new\s+Proxy"), Matches(r"Proxy\s*\(")]),
    ("reflect", &[Matches(r"Reflect\.")]),
    ("object-assign", &[Matches(r"Object\.assign")]),
    ("object-entries", &[Matches(r"Object\.entries")]),
    ("object-values", &[Matches(r"Object\.values")]),
    ("object-keys", &[Matches(r"Object\.keys")]),
    ("object-hasown", &[Matches(r"Object\.hasOwn")]),
    // Arrays and iteration
    (
        "array-methods",
        &[
            Matches(r"\.map\s*\("),
            Matches(r"\.filter\s*\("),
            Matches(r"\.reduce\s*\("),
            Matches(r"\.find\s*\("),
            Matches(r"\.forEach\s*\("),
        ],
    ),
    ("array-flat", &[Matches(r"\.flat\s*\("), Matches(r"\.flatMap\s*\(")]),
    ("array-at", &[Matches(r"\.at\s*\(")]),
    ("generators", &[Matches(r"function\s*\*"), Matches(r"yield\s+")]),
    (
        "iterators",
        &[Matches(r"Symbol\.iterator"), Matches(r"\[Symbol\.iterator\]")],
    ),
    // Promises and cancellation
    (
        "promise",
        &[
            Matches(r"new\s+Promise"),
            Matches(r"Promise\."),
            Matches(r"\.then\s*\("),
            Matches(r"\.catch\s*\("),
            Matches(r"\.finally\s*\("),
        ],
    ),
    ("promise-allsettled", &[Matches(r"Promise\.allSettled")]),
    ("promise-any", &[Matches(r"Promise\.any")]),
    (
        "abort-controller",
        &[
            Matches(r"new\s+AbortController"),
            Matches(r"AbortController\s*\("),
        ],
    ),
    ("abort-signal", &[Matches(r"AbortSignal"), Matches(r"signal\s*:")]),
    // Observers and messaging
    (
        "intersection-observer",
        &[
            Matches(r"new\s+IntersectionObserver"),
            Matches(r"IntersectionObserver\s*\("),
        ],
    ),
    (
        "resize-observer",
        &[
            Matches(r"new\s+ResizeObserver"),
            Matches(r"ResizeObserver\s*\("),
        ],
    ),
    (
        "mutation-observer",
        &[
            Matches(r"new\s+MutationObserver"),
            Matches(r"MutationObserver\s*\("),
        ],
    ),
    (
        "performance-observer",
        &[
            Matches(r"new\s+PerformanceObserver"),
            Matches(r"PerformanceObserver\s*\("),
        ],
    ),
    (
        "broadcast-channel",
        &[
            Matches(r"new\s+BroadcastChannel"),
            Matches(r"BroadcastChannel\s*\("),
        ],
    ),
    (
        "message-channel",
        &[
            Matches(r"new\s+MessageChannel"),
            Matches(r"MessageChannel\s*\("),
        ],
    ),
    // Storage
    (
        "indexeddb",
        &[
            Matches(r"indexedDB"),
            Matches(r"IDBDatabase"),
            Matches(r"IDBTransaction"),
        ],
    ),
    ("localstorage", &[Matches(r"localStorage")]),
    ("sessionstorage", &[Matches(r"sessionStorage")]),
    // Workers
    ("web-workers", &[Matches(r"new\s+Worker"), Matches(r"Worker\s*\(")]),
    (
        "shared-worker",
        &[Matches(r"new\s+SharedWorker"), Matches(r"SharedWorker\s*\(")],
    ),
    (
        "service-worker",
        &[Matches(r"navigator\.serviceWorker"), Matches(r"ServiceWorker")],
    ),
    // Graphics and media
    (
        "canvas",
        &[Matches(r#"getContext\s*\(\s*['"](?:2d|webgl|webgl2)['"]"#)],
    ),
    (
        "webgl",
        &[Matches(
            r#"getContext\s*\(\s*['"](?:webgl|experimental-webgl)['"]"#,
        )],
    ),
    ("webgl2", &[Matches(r#"getContext\s*\(\s*['"]webgl2['"]"#)]),
    (
        "web-audio",
        &[
            Matches(r"new\s+AudioContext"),
            Matches(r"AudioContext\s*\("),
            Matches(r"webkitAudioContext"),
        ],
    ),
    // Device
    (
        "geolocation",
        &[
            Matches(r"navigator\.geolocation"),
            Matches(r"getCurrentPosition"),
        ],
    ),
    (
        "device-orientation",
        &[
            Matches(r"DeviceOrientationEvent"),
            Matches(r"deviceorientation"),
        ],
    ),
    (
        "device-motion",
        &[Matches(r"DeviceMotionEvent"), Matches(r"devicemotion")],
    ),
    ("vibration", &[Matches(r"navigator\.vibrate")]),
    (
        "battery-status",
        &[Matches(r"navigator\.getBattery"), Matches(r"BatteryManager")],
    ),
    (
        "network-information",
        &[
            Matches(r"navigator\.connection"),
            Matches(r"NetworkInformation"),
        ],
    ),
    // Permissions and security
    (
        "permissions",
        &[Matches(r"navigator\.permissions"), Matches(r"Permissions")],
    ),
    (
        "notifications",
        &[Matches(r"new\s+Notification"), Matches(r"Notification\.")],
    ),
    (
        "push-notifications",
        &[Matches(r"PushManager"), Matches(r"PushSubscription")],
    ),
    (
        "credential-management",
        &[
            Matches(r"navigator\.credentials"),
            Matches(r"CredentialsContainer"),
        ],
    ),
    (
        "web-authn",
        &[
            Matches(r"navigator\.credentials\.create"),
            Matches(r"PublicKeyCredential"),
        ],
    ),
    // Files and data
    (
        "file-api",
        &[
            Matches(r"new\s+File"),
            Matches(r"File\s*\("),
            Matches(r"FileList"),
        ],
    ),
    (
        "filereader",
        &[Matches(r"new\s+FileReader"), Matches(r"FileReader\s*\(")],
    ),
    ("blob", &[Matches(r"new\s+Blob"), Matches(r"Blob\s*\(")]),
    (
        "formdata",
        &[Matches(r"new\s+FormData"), Matches(r"FormData\s*\(")],
    ),
    ("url-api", &[Matches(r"new\s+URL"), Matches(r"URL\s*\(")]),
    (
        "urlsearchparams",
        &[
            Matches(r"new\s+URLSearchParams"),
            Matches(r"URLSearchParams\s*\("),
        ],
    ),
    // Streams
    (
        "streams",
        &[
            Matches(r"ReadableStream"),
            Matches(r"WritableStream"),
            Matches(r"TransformStream"),
        ],
    ),
    (
        "readable-stream",
        &[
            Matches(r"new\s+ReadableStream"),
            Matches(r"ReadableStream\s*\("),
        ],
    ),
    (
        "writable-stream",
        &[
            Matches(r"new\s+WritableStream"),
            Matches(r"WritableStream\s*\("),
        ],
    ),
    (
        "transform-stream",
        &[
            Matches(r"new\s+TransformStream"),
            Matches(r"TransformStream\s*\("),
        ],
    ),
    // Encoding and crypto
    (
        "text-encoder",
        &[Matches(r"new\s+TextEncoder"), Matches(r"TextEncoder\s*\(")],
    ),
    (
        "text-decoder",
        &[Matches(r"new\s+TextDecoder"), Matches(r"TextDecoder\s*\(")],
    ),
    ("crypto-api", &[Matches(r"crypto\."), Matches(r"window\.crypto")]),
    (
        "crypto-subtle",
        &[Matches(r"crypto\.subtle"), Matches(r"SubtleCrypto")],
    ),
    // Internationalization
    ("intl", &[Matches(r"Intl\.")]),
    ("intl-collator", &[Matches(r"Intl\.Collator")]),
    ("intl-datetimeformat", &[Matches(r"Intl\.DateTimeFormat")]),
    ("intl-numberformat", &[Matches(r"Intl\.NumberFormat")]),
    ("intl-pluralrules", &[Matches(r"Intl\.PluralRules")]),
    ("intl-relativetimeformat", &[Matches(r"Intl\.RelativeTimeFormat")]),
    ("intl-listformat", &[Matches(r"Intl\.ListFormat")]),
    ("intl-locale", &[Matches(r"Intl\.Locale")]),
    ("intl-displaynames", &[Matches(r"Intl\.DisplayNames")]),
    ("intl-segmenter", &[Matches(r"Intl\.Segmenter")]),
    // Memory management
    ("weak-refs", &[Matches(r"new\s+WeakRef"), Matches(r"WeakRef\s*\(")]),
    (
        "finalization-registry",
        &[
            Matches(r"new\s+FinalizationRegistry"),
            Matches(r"FinalizationRegistry\s*\("),
        ],
    ),
    // Recent syntax
    ("bigint", &[Matches(r"(?-u:\d)+n(?-u:\b)"), Matches(r"BigInt\s*\(")]),
    ("nullish-coalescing", &[Matches(r"\?\?")]),
    ("optional-chaining", &[Matches(r"\?\.")]),
    (
        "logical-assignment",
        &[Matches(r"\|\|="), Matches(r"&&="), Matches(r"\?\?=")],
    ),
    ("numeric-separators", &[Matches(r"(?-u:\d)+_(?-u:\d)+")]),
    ("private-fields", &[Matches(r"#(?-u:\w)+")]),
    ("private-methods", &[Matches(r"#(?-u:\w)+\s*\(")]),
    ("static-blocks", &[Matches(r"static\s*\{")]),
    ("class-static-initialization-blocks", &[Matches(r"static\s*\{")]),
    // Module loading
    ("import-maps", &[Matches(r"importmap"), Matches(r#""imports"\s*:"#)]),
    ("import-assertions", &[Matches(r"import\s+.*assert\s*\{")]),
    ("import-attributes", &[Matches(r"import\s+.*with\s*\{")]),
    ("json-modules", &[Matches(r"import\s+.*\.json")]),
    // Page and window APIs
    (
        "page-visibility",
        &[
            Matches(r"document\.visibilityState"),
            Matches(r"visibilitychange"),
        ],
    ),
    (
        "fullscreen",
        &[
            Matches(r"requestFullscreen"),
            Matches(r"exitFullscreen"),
            Matches(r"fullscreenElement"),
        ],
    ),
    (
        "pointer-lock",
        &[Matches(r"requestPointerLock"), Matches(r"exitPointerLock")],
    ),
    (
        "screen-orientation",
        &[Matches(r"screen\.orientation"), Matches(r"orientationchange")],
    ),
    (
        "history-api",
        &[
            Matches(r"history\.pushState"),
            Matches(r"history\.replaceState"),
            Matches(r"popstate"),
        ],
    ),
    ("structured-clone", &[Matches(r"structuredClone\s*\(")]),
];
