pub const APP_STYLES: &str = "
                html, body {
                    margin: 0;
                    height: 100%;
                    background: #1d232a;
                    color: #a6adbb;
                    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
                }

                .drawer { position: relative; height: 100vh; }
                .drawer-toggle { display: none; }
                .drawer-content {
                    display: flex;
                    flex-direction: column;
                    height: 100vh;
                    overflow: hidden;
                }
                .drawer-side {
                    position: fixed;
                    inset: 0;
                    z-index: 10;
                    display: none;
                }
                .drawer-toggle:checked ~ .drawer-side { display: flex; }
                .drawer-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.4);
                    cursor: pointer;
                }
                .previous-games {
                    position: relative;
                    width: 320px;
                    height: 100%;
                    overflow-y: auto;
                    background: #2a323c;
                    z-index: 20;
                }

                .navbar {
                    background: #2a323c;
                    padding: 4px 8px;
                    z-index: 10;
                }
                .menu {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    font-size: 0.875rem;
                }
                .menu-horizontal { display: flex; gap: 4px; }
                .menu-vertical {
                    position: absolute;
                    min-width: 10rem;
                    background: #2a323c;
                    border-radius: 6px;
                    box-shadow: 0 4px 6px rgba(0,0,0,0.3);
                }
                .menu li { position: relative; }
                .menu a, .menu summary {
                    display: block;
                    padding: 6px 12px;
                    border-radius: 6px;
                    cursor: pointer;
                }
                .menu a:hover, .menu summary:hover { background: #3d4451; }
                .menu li.disabled a { color: #666; cursor: default; }
                .menu hr { border-color: #3d4451; margin: 4px 0; }

                .content { position: relative; width: 100%; height: 100%; }
                .board-column { position: absolute; left: 0; top: 0; }
                .screen-column { position: absolute; right: 0; top: 0; }
                .pgn-column { position: absolute; }

                .board-frame { position: relative; }
                .board-widget {
                    position: absolute;
                    left: 0;
                    top: 0;
                    width: 100%;
                    height: 100%;
                }
                .board-arrows {
                    position: absolute;
                    left: 0;
                    top: 0;
                    padding: 0;
                    opacity: 0.7;
                    pointer-events: none;
                }

                .evaluation { text-align: center; }
                .caption { font-weight: bold; margin: 4px 0; }
                .progress { width: 100%; }

                .centaur-screen { display: flex; flex-direction: column; align-items: center; }
                .upside-down { transform: rotate(180deg); }

                .pgn-panel {
                    height: 100%;
                    min-width: 12rem;
                    overflow-y: auto;
                    padding: 0 8px;
                }
                .pgn-row a { cursor: pointer; }
                .pgn-panel .current { color: #f0d9b5; font-weight: bold; }

                .editor { display: flex; flex-direction: column; height: 100vh; }
                .join { display: flex; align-items: center; gap: 4px; padding: 8px; }
                .file-name { margin: 0 16px; }
                .text-error { color: #f87272; font-size: 1rem; }
                .code {
                    flex: 1;
                    width: 100%;
                    box-sizing: border-box;
                    background: #191e24;
                    color: #a6adbb;
                    border: none;
                    padding: 8px;
                    font-family: monospace;
                    font-size: 14px;
                    resize: none;
                }
                .code.properties { color: #7dd3fc; }

                .modal {
                    display: none;
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.4);
                    border: none;
                    width: 100%;
                    height: 100%;
                    z-index: 30;
                }
                .modal-open { display: flex; align-items: center; justify-content: center; }
                .modal-box {
                    background: #2a323c;
                    color: #a6adbb;
                    border-radius: 12px;
                    padding: 24px;
                    min-width: 320px;
                }
                .modal-action { display: flex; justify-content: flex-end; gap: 8px; margin-top: 16px; }
                .title { font-weight: bold; margin-top: 0; }
                .pgn-text { width: 100%; min-height: 12rem; font-family: monospace; }

                .btn {
                    padding: 6px 14px;
                    border-radius: 6px;
                    border: 1px solid #3d4451;
                    background: #2a323c;
                    color: inherit;
                    cursor: pointer;
                }
                .btn:disabled { opacity: 0.5; cursor: default; }
                .btn-primary { background: #7480ff; color: #050617; border-color: #7480ff; }
                .btn-circle { border-radius: 50%; padding: 2px 6px; }
                .btn-error { color: #f87272; }

                .toast {
                    position: fixed;
                    right: 16px;
                    bottom: 16px;
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    z-index: 40;
                }
                .alert {
                    display: flex;
                    align-items: center;
                    gap: 12px;
                    background: #3abff8;
                    color: #002b3d;
                    border-radius: 8px;
                    padding: 12px 16px;
                }
";
